//! # Weft Interception
//!
//! `weft_interception` decides, for one managed component type, which
//! interceptors wrap which lifecycle events and business method invocations,
//! and assembles the answer into a validated, immutable interception model.
//!
//! Key concepts:
//!
//! 1. **Binding Resolution**: interceptors are bound through binding markers
//!    on the class, its stereotypes, its constructor and its methods. Member
//!    bindings override class bindings of the same tag type.
//!
//! 2. **Explicit Interceptor Lists**: interceptor classes listed directly on
//!    the class, constructor or methods, applied alongside resolved ones.
//!
//! 3. **Interception Model**: global records per phase plus per-method
//!    records, with methods that opt out of global interceptors.
//!
//! 4. **Model Registry**: at most one published model per component type.

pub mod engine;
pub mod integration;
pub mod model;
pub mod store;

// Re-export key types and traits for convenience
pub use engine::{DiagnosticLog, InitOutcome, InterceptionModelInitializer, ResolutionContext};
pub use integration::{DefaultMetadataReader, InMemoryInterceptorResolver};
pub use model::{InterceptionModel, InterceptionModelBuilder, InterceptionRecord, ModelSummary};
pub use store::{InMemoryBindingCatalog, InMemoryModelRegistry, ModelRegistry};

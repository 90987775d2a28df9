//! # Weft Core
//!
//! `weft_core` provides the shared vocabulary of the Weft interception engine:
//! error types, type names, component metadata, interceptor metadata and the
//! traits implemented by the collaborators the engine consults while it builds
//! an interception model.
//!
//! ## Concepts
//!
//! 1. **Marker**: a metadata tag (tag type plus attribute values) attached to a
//!    class, constructor or method. Markers whose tag type is a registered
//!    binding type declare interceptor bindings.
//!
//! 2. **Interception Type**: the closed set of lifecycle and invocation points
//!    an interceptor may wrap.
//!
//! 3. **Component Type**: the explicit, read-only description of a managed
//!    class: its markers, constructors, methods and explicit interceptor lists.
//!
//! 4. **Interceptor Handle**: an immutable, shareable view of an interceptor
//!    class and the phases it is eligible for.
//!
//! ## Crate Structure
//!
//! - **error**: Error taxonomy for binding resolution, registries and configuration
//! - **id**: Type names and erased component keys
//! - **traits**: Collaborator interfaces (binding catalog, resolver, metadata reader)
//! - **types**: Data structures describing components and interceptors
//! - **utils**: Configuration and diagnostics

pub mod error;
pub mod id;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export key types and traits for convenience
pub use error::{ConfigError, Error, InterceptionError, RegistryError, Result};
pub use id::TypeName;
pub use traits::{BindingCatalog, InterceptorMetadataReader, InterceptorResolver};
pub use types::{
    BindingMap, BindingSet, ComponentType, ConstructorInfo, InterceptionType,
    InterceptorClassMetadata, InterceptorDefinition, InterceptorHandle, Marker, MethodInfo,
    MethodSignature, OwnerBean, TargetClassMetadata, Visibility,
};
pub use utils::{Diagnostic, DiagnosticKind, InterceptionConfig, LogLevel};

//! Binding resolution engine.
//!
//! The resolution stages, in dependency order:
//!
//! 1. **collector**: effective class-level bindings, including stereotypes
//! 2. **merger**: member-level bindings overriding class-level ones
//! 3. **lifecycle**: global lifecycle and around-construct interceptors
//! 4. **business**: per-method around-invoke and around-timeout interceptors
//! 5. **declarative**: explicitly listed interceptor classes
//!
//! `InterceptionModelInitializer` runs them in a fixed order, validates the
//! result and publishes it.

pub mod business;
pub mod collector;
mod context;
pub mod declarative;
mod diagnostics;
mod initializer;
pub mod lifecycle;
pub mod merger;

pub use context::ResolutionContext;
pub use diagnostics::DiagnosticLog;
pub use initializer::{InitOutcome, InterceptionModelInitializer};

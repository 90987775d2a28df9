//! Interceptor resolver trait.

use crate::types::{BindingSet, InterceptionType, InterceptorDefinition};

/// Resolves the enabled interceptors matching a phase and a set of bindings.
pub trait InterceptorResolver: Send + Sync {
    /// Get the interceptors for `phase` whose bindings are all present in
    /// `bindings`.
    ///
    /// The result is already ordered by the container's ordering policy and
    /// must be deterministic for the same inputs.
    fn resolve(&self, phase: InterceptionType, bindings: &BindingSet) -> Vec<InterceptorDefinition>;
}

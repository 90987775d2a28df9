//! Interception records.

use weft_core::types::{BindingSet, InterceptionType, InterceptorHandle, MethodSignature};
use weft_core::TypeName;

/// One resolved interception: the interceptors wrapping a phase, either
/// globally or for a single method.
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptionRecord {
    /// The intercepted phase.
    pub phase: InterceptionType,

    /// The target method, or `None` for a global record.
    pub method: Option<MethodSignature>,

    /// The interceptors in invocation order.
    pub interceptors: Vec<InterceptorHandle>,

    /// The binding set the interceptors were resolved from, if any.
    pub bindings: Option<BindingSet>,
}

impl InterceptionRecord {
    /// Create a global record.
    pub fn global(
        phase: InterceptionType,
        interceptors: Vec<InterceptorHandle>,
        bindings: Option<BindingSet>,
    ) -> Self {
        Self {
            phase,
            method: None,
            interceptors,
            bindings,
        }
    }

    /// Create a per-method record.
    pub fn for_method(
        phase: InterceptionType,
        method: MethodSignature,
        interceptors: Vec<InterceptorHandle>,
        bindings: Option<BindingSet>,
    ) -> Self {
        Self {
            phase,
            method: Some(method),
            interceptors,
            bindings,
        }
    }

    /// Whether this record applies to every method of the component.
    pub fn is_global(&self) -> bool {
        self.method.is_none()
    }

    /// The interceptor classes of this record in order.
    pub fn interceptor_classes(&self) -> impl Iterator<Item = &TypeName> {
        self.interceptors.iter().map(|handle| &handle.class)
    }
}

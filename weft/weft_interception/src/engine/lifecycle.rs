//! Lifecycle interceptor resolution.
//!
//! Class lifecycle callbacks are resolved against the class-level bindings and
//! recorded without their originating bindings. Around-construct is resolved
//! against the merged constructor bindings and its record carries them.

use log::trace;
use weft_core::types::{BindingSet, InterceptionType};

use super::context::ResolutionContext;
use crate::model::InterceptionModelBuilder;

/// Record global interceptors for the class lifecycle callbacks.
///
/// Nothing is resolved when the class has no bindings.
pub fn resolve_lifecycle_interceptors(
    ctx: &ResolutionContext<'_>,
    mut builder: InterceptionModelBuilder,
    class_bindings: &BindingSet,
) -> InterceptionModelBuilder {
    if class_bindings.is_empty() {
        return builder;
    }

    for phase in InterceptionType::CLASS_LIFECYCLE {
        let interceptors = ctx.resolve(phase, class_bindings);
        trace!(
            "{}: {} resolved {} interceptor(s)",
            ctx.component.name,
            phase,
            interceptors.len()
        );
        builder = builder.intercept_global(phase, interceptors, None);
    }

    builder
}

/// Record global around-construct interceptors bound to the constructor.
///
/// Nothing is resolved when the merged constructor bindings are empty.
pub fn resolve_constructor_interceptors(
    ctx: &ResolutionContext<'_>,
    builder: InterceptionModelBuilder,
    constructor_bindings: BindingSet,
) -> InterceptionModelBuilder {
    if constructor_bindings.is_empty() {
        return builder;
    }

    let interceptors = ctx.resolve(InterceptionType::AroundConstruct, &constructor_bindings);
    builder
        .with_constructor_bindings(constructor_bindings.clone())
        .intercept_global(
            InterceptionType::AroundConstruct,
            interceptors,
            Some(constructor_bindings),
        )
}

//! Explicitly listed interceptor classes.
//!
//! Interceptor classes can be listed directly on the class, the constructor
//! and business methods. These lists bypass binding resolution entirely and
//! are recorded alongside whatever the bindings resolve; nothing is
//! deduplicated between the two.

use weft_core::types::{ConstructorInfo, InterceptionType, MethodInfo};
use weft_core::{InterceptionError, Result};

use super::context::ResolutionContext;
use crate::model::InterceptionModelBuilder;

/// Record the class-level interceptor list.
///
/// Each listed class is recorded once per phase it is eligible for, in phase
/// declaration order. Around-construct is skipped when the constructor
/// excludes class interceptors.
pub fn resolve_class_declared_interceptors(
    ctx: &ResolutionContext<'_>,
    mut builder: InterceptionModelBuilder,
    constructor: &ConstructorInfo,
) -> InterceptionModelBuilder {
    for class in &ctx.component.interceptors {
        let interceptor = ctx.reader.plain_interceptor_metadata(class);

        for phase in InterceptionType::ALL {
            if phase == InterceptionType::AroundConstruct && constructor.exclude_class_interceptors {
                continue;
            }
            if interceptor.is_eligible(phase) {
                builder = builder.intercept_global(phase, vec![interceptor.clone()], None);
            }
        }
    }

    builder
}

/// Record the constructor-level interceptor list as around-construct.
pub fn resolve_constructor_declared_interceptors(
    ctx: &ResolutionContext<'_>,
    mut builder: InterceptionModelBuilder,
    constructor: &ConstructorInfo,
) -> InterceptionModelBuilder {
    for class in &constructor.interceptors {
        let interceptor = ctx.reader.plain_interceptor_metadata(class);
        builder = builder.intercept_global(InterceptionType::AroundConstruct, vec![interceptor], None);
    }

    builder
}

/// Record method-level interceptor lists and class-interceptor exclusions.
///
/// A listed method is intercepted around its timeouts if it is a timeout
/// handler and around its invocations otherwise. Listing interceptors on a
/// final method is always an error.
pub fn resolve_method_declared_interceptors(
    ctx: &ResolutionContext<'_>,
    mut builder: InterceptionModelBuilder,
    methods: &[&MethodInfo],
) -> Result<InterceptionModelBuilder> {
    for method in methods {
        let signature = method.signature();

        if method.exclude_class_interceptors {
            builder = builder.ignore_global_interceptors(signature.clone());
        }

        let Some(first) = method.interceptors.first() else {
            continue;
        };

        if method.is_final {
            return Err(InterceptionError::FinalMethodNotInterceptable {
                method: signature,
                interceptor: first.clone(),
            }
            .into());
        }

        let phase = if method.is_timeout {
            InterceptionType::AroundTimeout
        } else {
            InterceptionType::AroundInvoke
        };
        let interceptors = method
            .interceptors
            .iter()
            .map(|class| ctx.reader.plain_interceptor_metadata(class))
            .collect();

        builder = builder.intercept_method(phase, signature, interceptors, None);
    }

    Ok(builder)
}

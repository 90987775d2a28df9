//! Business method interceptor resolution.

use log::trace;
use weft_core::types::{BindingMap, InterceptionType, MethodInfo};
use weft_core::{Diagnostic, DiagnosticKind, InterceptionError, Result};

use super::context::ResolutionContext;
use super::merger::merge_member_bindings;
use crate::model::InterceptionModelBuilder;

/// Record per-method around-invoke and around-timeout interceptors.
///
/// Each method's merged bindings are resolved for both phases independently.
/// A final method with matching interceptors is rejected, unless its declaring
/// class matches the configured ignore pattern, in which case it is skipped
/// with a diagnostic.
pub fn resolve_business_method_interceptors(
    ctx: &ResolutionContext<'_>,
    mut builder: InterceptionModelBuilder,
    class_bindings: &BindingMap,
    methods: &[&MethodInfo],
) -> Result<InterceptionModelBuilder> {
    for method in methods {
        let bindings =
            merge_member_bindings(ctx.catalog, &ctx.component.name, class_bindings, &method.markers)?;
        if bindings.is_empty() {
            continue;
        }

        let signature = method.signature();
        builder = builder.with_method_bindings(signature.clone(), bindings.clone());

        for phase in InterceptionType::BUSINESS {
            let interceptors = ctx.resolve(phase, &bindings);
            let Some(first) = interceptors.first() else {
                trace!("{}: no {} interceptors for {}", ctx.component.name, phase, signature);
                continue;
            };

            if method.is_final {
                if !ctx.config.is_final_method_ignored(method.declaring_type.as_str()) {
                    return Err(InterceptionError::FinalMethodNotInterceptable {
                        method: signature,
                        interceptor: first.class.clone(),
                    }
                    .into());
                }

                ctx.report(Diagnostic::new(
                    ctx.component.name.clone(),
                    DiagnosticKind::FinalMethodSkipped {
                        method: signature.clone(),
                        interceptor: first.class.clone(),
                        phase,
                    },
                ));
                continue;
            }

            builder = builder.intercept_method(phase, signature.clone(), interceptors, Some(bindings.clone()));
        }
    }

    Ok(builder)
}

//! The immutable interception model of a component type.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use weft_core::types::{
    BindingSet, InterceptionType, InterceptorHandle, MethodSignature, TargetClassMetadata,
};
use weft_core::TypeName;

use super::record::InterceptionRecord;
use super::summary::ModelSummary;

/// The validated interception model of one component type.
///
/// A model is built once by `InterceptionModelBuilder`, published into a
/// registry and shared as `Arc<InterceptionModel>` with the invocation layer.
/// Per-method records take precedence over global ones: a method listed in the
/// exclusion set never receives global interceptors.
#[derive(Debug, Clone, PartialEq)]
pub struct InterceptionModel {
    pub(crate) component: TypeName,
    pub(crate) target_class: Option<TargetClassMetadata>,
    pub(crate) class_bindings: BindingSet,
    pub(crate) constructor_bindings: BindingSet,
    pub(crate) method_bindings: BTreeMap<MethodSignature, BindingSet>,
    pub(crate) global: Vec<InterceptionRecord>,
    pub(crate) per_method: BTreeMap<MethodSignature, Vec<InterceptionRecord>>,
    pub(crate) excluded: BTreeSet<MethodSignature>,
    pub(crate) built_at: DateTime<Utc>,
}

impl InterceptionModel {
    /// The component type this model intercepts.
    pub fn component(&self) -> &TypeName {
        &self.component
    }

    /// Self-interception metadata of the target class, if it was read.
    pub fn target_class_metadata(&self) -> Option<&TargetClassMetadata> {
        self.target_class.as_ref()
    }

    /// The effective class-level bindings.
    pub fn class_bindings(&self) -> &BindingSet {
        &self.class_bindings
    }

    /// The merged constructor bindings around-construct was resolved against.
    pub fn constructor_bindings(&self) -> &BindingSet {
        &self.constructor_bindings
    }

    /// The merged bindings of a business method, if it had any.
    pub fn method_bindings(&self, method: &MethodSignature) -> Option<&BindingSet> {
        self.method_bindings.get(method)
    }

    /// All global records in recording order.
    pub fn global_records(&self) -> &[InterceptionRecord] {
        &self.global
    }

    /// The per-method records of `method` in recording order.
    pub fn method_records(&self, method: &MethodSignature) -> &[InterceptionRecord] {
        self.per_method.get(method).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Methods that have per-method records.
    pub fn intercepted_methods(&self) -> impl Iterator<Item = &MethodSignature> {
        self.per_method.keys()
    }

    /// Whether `method` ignores global interceptors.
    pub fn is_excluded(&self, method: &MethodSignature) -> bool {
        self.excluded.contains(method)
    }

    /// Global interceptors of a lifecycle phase, in order.
    pub fn lifecycle_interceptors(&self, phase: InterceptionType) -> Vec<InterceptorHandle> {
        self.global
            .iter()
            .filter(|record| record.phase == phase)
            .flat_map(|record| record.interceptors.iter().cloned())
            .collect()
    }

    /// Interceptors wrapping `method` in `phase`.
    ///
    /// Global interceptors come first unless the method is excluded from them,
    /// followed by the method's own interceptors in recording order.
    pub fn method_interceptors(
        &self,
        phase: InterceptionType,
        method: &MethodSignature,
    ) -> Vec<InterceptorHandle> {
        let mut interceptors = if self.is_excluded(method) {
            Vec::new()
        } else {
            self.lifecycle_interceptors(phase)
        };

        interceptors.extend(
            self.method_records(method)
                .iter()
                .filter(|record| record.phase == phase)
                .flat_map(|record| record.interceptors.iter().cloned()),
        );

        interceptors
    }

    /// Every distinct interceptor class in the model, in first-seen order.
    pub fn all_interceptors(&self) -> Vec<InterceptorHandle> {
        let mut seen = HashSet::new();
        self.global
            .iter()
            .chain(self.per_method.values().flatten())
            .flat_map(|record| record.interceptors.iter())
            .filter(|handle| seen.insert(handle.class.clone()))
            .cloned()
            .collect()
    }

    /// Whether any external interceptor wraps construction.
    pub fn has_external_constructor_interceptors(&self) -> bool {
        self.global
            .iter()
            .any(|record| record.phase == InterceptionType::AroundConstruct && !record.interceptors.is_empty())
    }

    /// Whether any external interceptor wraps something other than construction.
    pub fn has_external_non_constructor_interceptors(&self) -> bool {
        self.global
            .iter()
            .any(|record| record.phase != InterceptionType::AroundConstruct && !record.interceptors.is_empty())
            || self
                .per_method
                .values()
                .flatten()
                .any(|record| !record.interceptors.is_empty())
    }

    /// When the model was built.
    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    /// A serializable summary of this model.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary::from(self)
    }

    /// Whether the model holds no interception records.
    pub fn is_empty(&self) -> bool {
        self.global.is_empty() && self.per_method.values().all(Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InterceptionModelBuilder;
    use std::sync::Arc;
    use weft_core::types::{InterceptorClassMetadata, Marker};

    fn handle(class: &str, phases: &[InterceptionType]) -> InterceptorHandle {
        Arc::new(InterceptorClassMetadata::new(class, phases.iter().copied()))
    }

    fn greet() -> MethodSignature {
        MethodSignature::new("com.acme.Greeter", "greet", Vec::<TypeName>::new())
    }

    #[test]
    fn test_method_interceptors_order() {
        let audit = handle("com.acme.AuditInterceptor", &[InterceptionType::AroundInvoke]);
        let logging = handle("com.acme.LoggingInterceptor", &[InterceptionType::AroundInvoke]);

        let model = InterceptionModelBuilder::new("com.acme.Greeter")
            .intercept_global(InterceptionType::AroundInvoke, vec![audit.clone()], None)
            .intercept_method(InterceptionType::AroundInvoke, greet(), vec![logging.clone()], None)
            .build();

        let classes: Vec<_> = model
            .method_interceptors(InterceptionType::AroundInvoke, &greet())
            .into_iter()
            .map(|h| h.class.clone())
            .collect();
        assert_eq!(classes, vec![audit.class.clone(), logging.class.clone()]);

        // Other phases see nothing
        assert!(model
            .method_interceptors(InterceptionType::AroundTimeout, &greet())
            .is_empty());
    }

    #[test]
    fn test_excluded_method_skips_globals() {
        let audit = handle("com.acme.AuditInterceptor", &[InterceptionType::AroundInvoke]);

        let model = InterceptionModelBuilder::new("com.acme.Greeter")
            .intercept_global(InterceptionType::AroundInvoke, vec![audit], None)
            .ignore_global_interceptors(greet())
            .build();

        assert!(model.is_excluded(&greet()));
        assert!(model
            .method_interceptors(InterceptionType::AroundInvoke, &greet())
            .is_empty());
        assert_eq!(model.lifecycle_interceptors(InterceptionType::AroundInvoke).len(), 1);
    }

    #[test]
    fn test_all_interceptors_distinct() {
        let audit = handle("com.acme.AuditInterceptor", &[InterceptionType::AroundConstruct]);
        let logging = handle("com.acme.LoggingInterceptor", &[InterceptionType::AroundInvoke]);

        let model = InterceptionModelBuilder::new("com.acme.Greeter")
            .intercept_global(InterceptionType::AroundConstruct, vec![audit.clone()], None)
            .intercept_method(InterceptionType::AroundInvoke, greet(), vec![logging, audit], None)
            .build();

        let all = model.all_interceptors();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].class.as_str(), "com.acme.AuditInterceptor");
        assert!(model.has_external_constructor_interceptors());
        assert!(model.has_external_non_constructor_interceptors());
    }

    #[test]
    fn test_bindings_visible() {
        let logged: BindingSet = [Marker::new("com.acme.Logged")].into_iter().collect();

        let model = InterceptionModelBuilder::new("com.acme.Greeter")
            .with_class_bindings(logged.clone())
            .with_method_bindings(greet(), logged.clone())
            .build();

        assert_eq!(model.class_bindings(), &logged);
        assert_eq!(model.method_bindings(&greet()), Some(&logged));
        assert!(model.constructor_bindings().is_empty());
        assert!(model.is_empty());
        assert!(!model.has_external_constructor_interceptors());
    }
}

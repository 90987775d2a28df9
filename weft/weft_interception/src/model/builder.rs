//! Interception model builder.
//!
//! The builder is a plain value. Each resolution stage takes it by value,
//! records what it resolved and hands it back, so the order in which stages
//! contribute is visible in the initializer's control flow.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;
use weft_core::types::{
    BindingSet, InterceptionType, InterceptorHandle, MethodSignature, TargetClassMetadata,
};
use weft_core::TypeName;

use super::interception::InterceptionModel;
use super::record::InterceptionRecord;

/// Accumulates interception records for one component type.
#[derive(Debug, Clone)]
pub struct InterceptionModelBuilder {
    component: TypeName,
    target_class: Option<TargetClassMetadata>,
    class_bindings: BindingSet,
    constructor_bindings: BindingSet,
    method_bindings: BTreeMap<MethodSignature, BindingSet>,
    global: Vec<InterceptionRecord>,
    per_method: BTreeMap<MethodSignature, Vec<InterceptionRecord>>,
    excluded: BTreeSet<MethodSignature>,
}

impl InterceptionModelBuilder {
    /// Create an empty builder for `component`.
    pub fn new(component: impl Into<TypeName>) -> Self {
        Self {
            component: component.into(),
            target_class: None,
            class_bindings: BindingSet::new(),
            constructor_bindings: BindingSet::new(),
            method_bindings: BTreeMap::new(),
            global: Vec::new(),
            per_method: BTreeMap::new(),
            excluded: BTreeSet::new(),
        }
    }

    /// The component type being built.
    pub fn component(&self) -> &TypeName {
        &self.component
    }

    /// Set the self-interception metadata of the target class.
    pub fn with_target_class_metadata(mut self, metadata: TargetClassMetadata) -> Self {
        self.target_class = Some(metadata);
        self
    }

    /// Self-interception metadata of the target class, if set.
    pub fn target_class_metadata(&self) -> Option<&TargetClassMetadata> {
        self.target_class.as_ref()
    }

    /// Set the effective class-level bindings.
    pub fn with_class_bindings(mut self, bindings: BindingSet) -> Self {
        self.class_bindings = bindings;
        self
    }

    /// Set the merged constructor bindings.
    pub fn with_constructor_bindings(mut self, bindings: BindingSet) -> Self {
        self.constructor_bindings = bindings;
        self
    }

    /// Record the merged bindings of a business method.
    pub fn with_method_bindings(mut self, method: MethodSignature, bindings: BindingSet) -> Self {
        self.method_bindings.insert(method, bindings);
        self
    }

    /// Record interceptors applying to `phase` for the whole component.
    ///
    /// An empty interceptor list records nothing.
    pub fn intercept_global(
        mut self,
        phase: InterceptionType,
        interceptors: Vec<InterceptorHandle>,
        bindings: Option<BindingSet>,
    ) -> Self {
        if interceptors.is_empty() {
            return self;
        }

        trace!(
            "{}: global {} interceptors {:?}",
            self.component,
            phase,
            interceptors.iter().map(|h| h.class.as_str()).collect::<Vec<_>>()
        );
        self.global
            .push(InterceptionRecord::global(phase, interceptors, bindings));
        self
    }

    /// Record interceptors applying to `phase` for a single method.
    ///
    /// An empty interceptor list records nothing.
    pub fn intercept_method(
        mut self,
        phase: InterceptionType,
        method: MethodSignature,
        interceptors: Vec<InterceptorHandle>,
        bindings: Option<BindingSet>,
    ) -> Self {
        if interceptors.is_empty() {
            return self;
        }

        trace!(
            "{}: {} interceptors on {} {:?}",
            self.component,
            phase,
            method,
            interceptors.iter().map(|h| h.class.as_str()).collect::<Vec<_>>()
        );
        self.per_method
            .entry(method.clone())
            .or_default()
            .push(InterceptionRecord::for_method(phase, method, interceptors, bindings));
        self
    }

    /// Exclude `method` from global interceptors.
    pub fn ignore_global_interceptors(mut self, method: MethodSignature) -> Self {
        self.excluded.insert(method);
        self
    }

    /// Whether any interception record was added.
    pub fn has_records(&self) -> bool {
        !self.global.is_empty() || !self.per_method.is_empty()
    }

    /// Build the immutable model.
    pub fn build(self) -> InterceptionModel {
        InterceptionModel {
            component: self.component,
            target_class: self.target_class,
            class_bindings: self.class_bindings,
            constructor_bindings: self.constructor_bindings,
            method_bindings: self.method_bindings,
            global: self.global,
            per_method: self.per_method,
            excluded: self.excluded,
            built_at: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use weft_core::types::InterceptorClassMetadata;

    #[test]
    fn test_empty_interceptors_not_recorded() {
        let method = MethodSignature::new("com.acme.Greeter", "greet", Vec::<TypeName>::new());
        let builder = InterceptionModelBuilder::new("com.acme.Greeter")
            .intercept_global(InterceptionType::PostConstruct, Vec::new(), None)
            .intercept_method(InterceptionType::AroundInvoke, method, Vec::new(), None);

        assert!(!builder.has_records());
        assert!(builder.build().is_empty());
    }

    #[test]
    fn test_records_accumulate_in_order() {
        let first = Arc::new(InterceptorClassMetadata::new(
            "com.acme.FirstInterceptor",
            [InterceptionType::PostConstruct],
        ));
        let second = Arc::new(InterceptorClassMetadata::new(
            "com.acme.SecondInterceptor",
            [InterceptionType::PostConstruct],
        ));

        let builder = InterceptionModelBuilder::new("com.acme.Greeter")
            .intercept_global(InterceptionType::PostConstruct, vec![first], None)
            .intercept_global(InterceptionType::PostConstruct, vec![second], None);
        assert!(builder.has_records());
        assert_eq!(builder.component().as_str(), "com.acme.Greeter");

        let model = builder.build();
        let classes: Vec<_> = model
            .lifecycle_interceptors(InterceptionType::PostConstruct)
            .iter()
            .map(|h| h.class.to_string())
            .collect();
        assert_eq!(
            classes,
            vec!["com.acme.FirstInterceptor", "com.acme.SecondInterceptor"]
        );
    }
}

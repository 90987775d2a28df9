//! Default interceptor metadata reader.

use dashmap::DashMap;
use std::collections::BTreeSet;
use std::sync::Arc;

use log::trace;
use weft_core::traits::InterceptorMetadataReader;
use weft_core::types::{
    ComponentType, InterceptionType, InterceptorClassMetadata, InterceptorDefinition,
    InterceptorHandle, TargetClassMetadata,
};
use weft_core::TypeName;

/// A metadata reader backed by registered interceptor classes.
///
/// Handles are cached per class, so repeated lookups return the same `Arc`.
/// Handles read from definitions are also keyed by the definition's phases,
/// so a redefined interceptor gets a fresh handle. A class that was never
/// registered is treated as having no interceptor methods.
#[derive(Clone, Default)]
pub struct DefaultMetadataReader {
    /// Hook phases of registered interceptor classes.
    classes: Arc<DashMap<TypeName, BTreeSet<InterceptionType>>>,

    /// Handles of interceptors resolved from definitions, by class and phases.
    definition_cache: Arc<DashMap<(TypeName, BTreeSet<InterceptionType>), InterceptorHandle>>,

    /// Handles of explicitly listed interceptor classes.
    plain_cache: Arc<DashMap<TypeName, InterceptorHandle>>,
}

impl DefaultMetadataReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interceptor class and the phases it has hook methods for.
    pub fn register_interceptor_class(
        &self,
        class: impl Into<TypeName>,
        phases: impl IntoIterator<Item = InterceptionType>,
    ) {
        let class = class.into();
        self.definition_cache.retain(|(cached, _), _| cached != &class);
        self.plain_cache.remove(&class);
        self.classes.insert(class, phases.into_iter().collect());
    }

    fn registered_phases(&self, class: &TypeName) -> BTreeSet<InterceptionType> {
        self.classes
            .get(class)
            .map(|phases| phases.value().clone())
            .unwrap_or_default()
    }
}

impl InterceptorMetadataReader for DefaultMetadataReader {
    fn interceptor_metadata(&self, definition: &InterceptorDefinition) -> InterceptorHandle {
        let key = (definition.class.clone(), definition.phases.clone());
        self.definition_cache
            .entry(key)
            .or_insert_with(|| {
                let mut eligible = self.registered_phases(&definition.class);
                eligible.extend(definition.phases.iter().copied());
                trace!("Read interceptor metadata for {}", definition.class);
                Arc::new(InterceptorClassMetadata::new(definition.class.clone(), eligible))
            })
            .value()
            .clone()
    }

    fn plain_interceptor_metadata(&self, class: &TypeName) -> InterceptorHandle {
        self.plain_cache
            .entry(class.clone())
            .or_insert_with(|| {
                trace!("Read plain interceptor metadata for {}", class);
                Arc::new(InterceptorClassMetadata::new(class.clone(), self.registered_phases(class)))
            })
            .value()
            .clone()
    }

    fn target_class_metadata(&self, component: &ComponentType) -> TargetClassMetadata {
        TargetClassMetadata::new(
            component.name.clone(),
            component
                .methods
                .iter()
                .filter_map(|method| method.interceptor_hook),
        )
    }
}

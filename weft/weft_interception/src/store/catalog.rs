//! In-memory binding catalog.

use dashmap::DashMap;
use std::sync::Arc;
use weft_core::traits::BindingCatalog;
use weft_core::types::Marker;
use weft_core::TypeName;

/// An in-memory catalog of binding types and stereotypes.
#[derive(Clone, Default)]
pub struct InMemoryBindingCatalog {
    /// Binding types and the bindings each one inherits.
    bindings: Arc<DashMap<TypeName, Vec<Marker>>>,

    /// Stereotypes and the markers each one declares.
    stereotypes: Arc<DashMap<TypeName, Vec<Marker>>>,
}

impl InMemoryBindingCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a binding type without inherited bindings.
    pub fn register_binding_type(&self, kind: impl Into<TypeName>) {
        self.register_binding_type_with(kind, Vec::new());
    }

    /// Register a binding type and the bindings it inherits.
    pub fn register_binding_type_with(&self, kind: impl Into<TypeName>, inherited: Vec<Marker>) {
        self.bindings.insert(kind.into(), inherited);
    }

    /// Register a stereotype and the markers it declares.
    ///
    /// The markers may include binding markers and further stereotypes.
    pub fn register_stereotype(&self, kind: impl Into<TypeName>, markers: Vec<Marker>) {
        self.stereotypes.insert(kind.into(), markers);
    }
}

impl BindingCatalog for InMemoryBindingCatalog {
    fn is_binding_type(&self, kind: &TypeName) -> bool {
        self.bindings.contains_key(kind)
    }

    fn inherited_bindings(&self, kind: &TypeName) -> Vec<Marker> {
        self.bindings
            .get(kind)
            .map(|inherited| inherited.value().clone())
            .unwrap_or_default()
    }

    fn stereotype_definition(&self, kind: &TypeName) -> Option<Vec<Marker>> {
        self.stereotypes.get(kind).map(|markers| markers.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_types() {
        let catalog = InMemoryBindingCatalog::new();
        catalog.register_binding_type("com.acme.Logged");
        catalog.register_binding_type_with("com.acme.Transactional", vec![Marker::new("com.acme.Logged")]);

        let logged = TypeName::new("com.acme.Logged");
        assert!(catalog.is_binding_type(&logged));
        assert!(catalog.inherited_bindings(&logged).is_empty());
        assert_eq!(
            catalog.inherited_bindings(&TypeName::new("com.acme.Transactional")),
            vec![Marker::new("com.acme.Logged")]
        );
        assert!(!catalog.is_binding_type(&TypeName::new("java.lang.Deprecated")));
    }

    #[test]
    fn test_stereotypes() {
        let catalog = InMemoryBindingCatalog::new();
        catalog.register_stereotype("com.acme.Service", vec![Marker::new("com.acme.Logged")]);

        let service = TypeName::new("com.acme.Service");
        assert!(catalog.is_stereotype(&service));
        assert!(!catalog.is_binding_type(&service));
        assert_eq!(
            catalog.stereotype_definition(&service),
            Some(vec![Marker::new("com.acme.Logged")])
        );
        assert_eq!(catalog.stereotype_definition(&TypeName::new("com.acme.Other")), None);
    }
}

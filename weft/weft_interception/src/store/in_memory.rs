//! In-memory model registry.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use log::debug;
use std::sync::Arc;
use weft_core::{RegistryError, Result, TypeName};

use super::ModelRegistry;
use crate::model::InterceptionModel;

/// An in-memory model registry.
#[derive(Clone)]
pub struct InMemoryModelRegistry {
    /// The models, indexed by erased component type name.
    models: Arc<DashMap<TypeName, Arc<InterceptionModel>>>,
}

impl InMemoryModelRegistry {
    /// Create a new in-memory model registry.
    pub fn new() -> Self {
        Self {
            models: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelRegistry for InMemoryModelRegistry {
    fn put(&self, key: TypeName, model: Arc<InterceptionModel>) -> Result<()> {
        // Insert only if absent, under the shard lock
        match self.models.entry(key) {
            Entry::Occupied(entry) => Err(RegistryError::AlreadyPublished(entry.key().clone()).into()),
            Entry::Vacant(entry) => {
                debug!("Registered interception model for {}", entry.key());
                entry.insert(model);
                Ok(())
            }
        }
    }

    fn get(&self, key: &TypeName) -> Option<Arc<InterceptionModel>> {
        self.models.get(key).map(|model| model.value().clone())
    }

    fn contains(&self, key: &TypeName) -> bool {
        self.models.contains_key(key)
    }

    fn remove(&self, key: &TypeName) -> Option<Arc<InterceptionModel>> {
        self.models.remove(key).map(|(_, model)| model)
    }

    fn len(&self) -> usize {
        self.models.len()
    }

    fn keys(&self) -> Vec<TypeName> {
        self.models.iter().map(|entry| entry.key().clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InterceptionModelBuilder;
    use std::thread;
    use weft_core::Error;

    fn model(name: &str) -> Arc<InterceptionModel> {
        Arc::new(InterceptionModelBuilder::new(name).build())
    }

    #[test]
    fn test_put_and_get() {
        let registry = InMemoryModelRegistry::new();
        let key = TypeName::new("com.acme.Greeter");

        registry.put(key.clone(), model("com.acme.Greeter")).unwrap();

        assert!(registry.contains(&key));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key).unwrap().component(), &key);
        assert_eq!(registry.keys(), vec![key]);
    }

    #[test]
    fn test_first_publish_wins() {
        let registry = InMemoryModelRegistry::new();
        let key = TypeName::new("com.acme.Greeter");
        let first = model("com.acme.Greeter");

        registry.put(key.clone(), first.clone()).unwrap();
        let result = registry.put(key.clone(), model("com.acme.Greeter"));

        assert!(matches!(
            result,
            Err(Error::Registry(RegistryError::AlreadyPublished(_)))
        ));
        assert!(Arc::ptr_eq(&registry.get(&key).unwrap(), &first));
    }

    #[test]
    fn test_remove() {
        let registry = InMemoryModelRegistry::new();
        let key = TypeName::new("com.acme.Greeter");

        registry.put(key.clone(), model("com.acme.Greeter")).unwrap();
        assert!(registry.remove(&key).is_some());
        assert!(registry.is_empty());
        assert!(registry.remove(&key).is_none());

        // A removed key can be published again
        registry.put(key, model("com.acme.Greeter")).unwrap();
    }

    #[test]
    fn test_concurrent_publish_same_key() {
        let registry = InMemoryModelRegistry::new();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || {
                    registry
                        .put(TypeName::new("com.acme.Greeter"), model("com.acme.Greeter"))
                        .is_ok()
                })
            })
            .collect();

        let published = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .filter(|ok| *ok)
            .count();

        assert_eq!(published, 1);
        assert_eq!(registry.len(), 1);
    }
}

//! Model and binding storage.
//!
//! This module provides the registry published interception models live in,
//! and an in-memory binding catalog.

mod catalog;
mod in_memory;

pub use catalog::InMemoryBindingCatalog;
pub use in_memory::InMemoryModelRegistry;

use std::sync::Arc;

use weft_core::{Result, TypeName};

use crate::model::InterceptionModel;

/// Trait for interception model registries.
///
/// A registry holds at most one model per erased component type name. The
/// first successful publish wins; models are never replaced, only removed
/// when the component type is unregistered.
pub trait ModelRegistry: Send + Sync {
    /// Publish a model.
    ///
    /// # Arguments
    ///
    /// * `key` - The erased component type name.
    /// * `model` - The model to publish.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the model was published.
    /// * `Err` - `AlreadyPublished` if a model is already registered under `key`.
    fn put(&self, key: TypeName, model: Arc<InterceptionModel>) -> Result<()>;

    /// Get the model published under `key`.
    fn get(&self, key: &TypeName) -> Option<Arc<InterceptionModel>>;

    /// Whether a model is published under `key`.
    fn contains(&self, key: &TypeName) -> bool {
        self.get(key).is_some()
    }

    /// Remove the model published under `key`.
    fn remove(&self, key: &TypeName) -> Option<Arc<InterceptionModel>>;

    /// Number of published models.
    fn len(&self) -> usize;

    /// Whether no model is published.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keys of all published models.
    fn keys(&self) -> Vec<TypeName>;
}

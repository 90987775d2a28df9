//! In-memory interceptor resolver.

use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use log::trace;
use weft_core::traits::InterceptorResolver;
use weft_core::types::{BindingSet, InterceptionType, InterceptorDefinition};
use weft_core::TypeName;

/// An in-memory interceptor resolver.
///
/// A definition matches a request when it is enabled, implements the requested
/// phase, and has at least one binding, all of which are present by full value
/// in the requested binding set. Matches are ordered by ascending priority,
/// then by registration order.
#[derive(Clone, Default)]
pub struct InMemoryInterceptorResolver {
    /// Definitions with their registration sequence, indexed by class.
    definitions: Arc<DashMap<TypeName, (u64, InterceptorDefinition)>>,

    /// Next registration sequence number.
    sequence: Arc<AtomicU64>,
}

impl InMemoryInterceptorResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interceptor definition.
    ///
    /// Registering a class again replaces its definition and moves it to the
    /// end of the registration order.
    pub fn register(&self, definition: InterceptorDefinition) {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst);
        self.definitions
            .insert(definition.class.clone(), (sequence, definition));
    }

    /// Enable or disable a registered interceptor.
    ///
    /// # Returns
    ///
    /// `true` if the class is registered.
    pub fn set_enabled(&self, class: &TypeName, enabled: bool) -> bool {
        match self.definitions.get_mut(class) {
            Some(mut entry) => {
                entry.1.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Remove a registered interceptor.
    pub fn unregister(&self, class: &TypeName) -> Option<InterceptorDefinition> {
        self.definitions.remove(class).map(|(_, (_, definition))| definition)
    }

    /// Number of registered interceptors.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether no interceptor is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

impl InterceptorResolver for InMemoryInterceptorResolver {
    fn resolve(&self, phase: InterceptionType, bindings: &BindingSet) -> Vec<InterceptorDefinition> {
        let mut matches: Vec<(i32, u64, InterceptorDefinition)> = self
            .definitions
            .iter()
            .filter(|entry| {
                let definition = &entry.value().1;
                definition.enabled
                    && definition.intercepts(phase)
                    && !definition.bindings.is_empty()
                    && definition.bindings.iter().all(|binding| bindings.contains(binding))
            })
            .map(|entry| {
                let (sequence, definition) = entry.value();
                (definition.priority, *sequence, definition.clone())
            })
            .collect();

        matches.sort_by_key(|(priority, sequence, _)| (*priority, *sequence));
        trace!("Resolved {} {} interceptor(s)", matches.len(), phase);

        matches.into_iter().map(|(_, _, definition)| definition).collect()
    }
}

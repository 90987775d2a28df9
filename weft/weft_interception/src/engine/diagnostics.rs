//! Diagnostic retention.

use dashmap::DashMap;
use std::sync::Arc;
use weft_core::{Diagnostic, InterceptionConfig, LogLevel, TypeName};

/// A bounded log of diagnostics per component type.
#[derive(Clone)]
pub struct DiagnosticLog {
    /// The diagnostics, indexed by component type.
    entries: Arc<DashMap<TypeName, Vec<Diagnostic>>>,

    /// The maximum number of diagnostics to keep per component type.
    max_entries_per_component: usize,
}

impl DiagnosticLog {
    /// Create a new diagnostic log.
    ///
    /// # Arguments
    ///
    /// * `max_entries_per_component` - The maximum number of diagnostics to keep
    ///   per component type. Older entries are dropped first.
    pub fn new(max_entries_per_component: usize) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            max_entries_per_component,
        }
    }

    /// Create a diagnostic log bounded by the configured limit.
    pub fn from_config(config: &InterceptionConfig) -> Self {
        Self::new(config.max_diagnostics_per_component)
    }

    /// Record a diagnostic.
    pub fn record(&self, diagnostic: Diagnostic) {
        let mut entries = self.entries.entry(diagnostic.component.clone()).or_default();
        entries.push(diagnostic);

        // Trim the entries if necessary
        if entries.len() > self.max_entries_per_component {
            let to_remove = entries.len() - self.max_entries_per_component;
            entries.drain(0..to_remove);
        }
    }

    /// Get the diagnostics of a component type, oldest first.
    pub fn get_diagnostics(&self, component: &TypeName) -> Vec<Diagnostic> {
        match self.entries.get(component) {
            Some(entries) => entries.clone(),
            None => Vec::new(),
        }
    }

    /// Get all diagnostics at or above `level`.
    pub fn get_diagnostics_at_least(&self, level: LogLevel) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for entry in self.entries.iter() {
            for diagnostic in entry.value() {
                if diagnostic.level.is_at_least(level) {
                    diagnostics.push(diagnostic.clone());
                }
            }
        }

        diagnostics
    }

    /// Clear the diagnostics of a component type.
    pub fn clear_diagnostics(&self, component: &TypeName) {
        self.entries.remove(component);
    }

    /// Total number of retained diagnostics.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|entry| entry.value().len()).sum()
    }

    /// Whether no diagnostics are retained.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::from_config(&InterceptionConfig::default())
    }
}

//! Serializable model summaries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use weft_core::types::{InterceptionType, Marker};
use weft_core::{Error, Result, TypeName};

use super::interception::InterceptionModel;

/// A flat, serializable view of an interception model.
///
/// Lists interceptor class names per phase, globally and per method, for
/// logging and inspection tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    /// The intercepted component type.
    pub component: TypeName,

    /// The effective class-level bindings.
    pub class_bindings: Vec<Marker>,

    /// Global interceptor classes per phase.
    pub global: BTreeMap<InterceptionType, Vec<TypeName>>,

    /// Per-method interceptor classes per phase, keyed by method display name.
    pub methods: BTreeMap<String, BTreeMap<InterceptionType, Vec<TypeName>>>,

    /// Methods that ignore global interceptors, by display name.
    pub excluded: Vec<String>,

    /// When the model was built.
    pub built_at: DateTime<Utc>,
}

impl ModelSummary {
    /// Render the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

impl From<&InterceptionModel> for ModelSummary {
    fn from(model: &InterceptionModel) -> Self {
        let mut global: BTreeMap<InterceptionType, Vec<TypeName>> = BTreeMap::new();
        for record in &model.global {
            global
                .entry(record.phase)
                .or_default()
                .extend(record.interceptor_classes().cloned());
        }

        let mut methods: BTreeMap<String, BTreeMap<InterceptionType, Vec<TypeName>>> = BTreeMap::new();
        for (method, records) in &model.per_method {
            let phases = methods.entry(method.to_string()).or_default();
            for record in records {
                phases
                    .entry(record.phase)
                    .or_default()
                    .extend(record.interceptor_classes().cloned());
            }
        }

        Self {
            component: model.component.clone(),
            class_bindings: model.class_bindings.iter().cloned().collect(),
            global,
            methods,
            excluded: model.excluded.iter().map(ToString::to_string).collect(),
            built_at: model.built_at,
        }
    }
}

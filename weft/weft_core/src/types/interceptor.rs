//! Interceptor metadata.
//!
//! `InterceptorDefinition` is what an interceptor resolver returns: an enabled
//! interceptor together with the bindings it is declared for.
//! `InterceptorClassMetadata` is the invocable view the metadata reader turns a
//! definition or a plain interceptor class into. It is shared as an
//! `InterceptorHandle` and never mutated once created.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::marker::Marker;
use super::phase::InterceptionType;
use crate::id::TypeName;

/// A shared, immutable interceptor metadata handle.
pub type InterceptorHandle = Arc<InterceptorClassMetadata>;

/// An interceptor known to a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterceptorDefinition {
    /// The interceptor implementation class.
    pub class: TypeName,

    /// The bindings the interceptor is declared for.
    #[serde(default)]
    pub bindings: Vec<Marker>,

    /// The phases the interceptor implements.
    #[serde(default)]
    pub phases: BTreeSet<InterceptionType>,

    /// Ordering priority; lower runs first.
    #[serde(default)]
    pub priority: i32,

    /// Whether the interceptor is enabled.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl InterceptorDefinition {
    /// Create an enabled interceptor definition with default priority.
    pub fn new(class: impl Into<TypeName>) -> Self {
        Self {
            class: class.into(),
            bindings: Vec::new(),
            phases: BTreeSet::new(),
            priority: 0,
            enabled: true,
        }
    }

    /// Add a binding.
    pub fn with_binding(mut self, binding: Marker) -> Self {
        self.bindings.push(binding);
        self
    }

    /// Add an implemented phase.
    pub fn with_phase(mut self, phase: InterceptionType) -> Self {
        self.phases.insert(phase);
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the interceptor implements `phase`.
    pub fn intercepts(&self, phase: InterceptionType) -> bool {
        self.phases.contains(&phase)
    }
}

/// Invocable metadata of an interceptor class.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterceptorClassMetadata {
    /// The interceptor class.
    pub class: TypeName,

    /// The phases the class has interceptor methods for.
    pub eligible: BTreeSet<InterceptionType>,
}

impl InterceptorClassMetadata {
    /// Create interceptor metadata.
    pub fn new(class: impl Into<TypeName>, eligible: impl IntoIterator<Item = InterceptionType>) -> Self {
        Self {
            class: class.into(),
            eligible: eligible.into_iter().collect(),
        }
    }

    /// Whether this interceptor has a method for `phase`.
    pub fn is_eligible(&self, phase: InterceptionType) -> bool {
        self.eligible.contains(&phase)
    }
}

/// Self-interception metadata of a target class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetClassMetadata {
    /// The target class.
    pub class: TypeName,

    /// The phases the target class has its own hook methods for.
    pub eligible: BTreeSet<InterceptionType>,
}

impl TargetClassMetadata {
    /// Create target class metadata.
    pub fn new(class: impl Into<TypeName>, eligible: impl IntoIterator<Item = InterceptionType>) -> Self {
        Self {
            class: class.into(),
            eligible: eligible.into_iter().collect(),
        }
    }

    /// Whether the target class has a hook for `phase`.
    pub fn is_eligible(&self, phase: InterceptionType) -> bool {
        self.eligible.contains(&phase)
    }

    /// Whether the target class has serialization or invocation hooks that
    /// require a model of their own.
    pub fn requires_model(&self) -> bool {
        self.eligible.iter().any(|phase| phase.requires_self_interception())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_builder() {
        let def = InterceptorDefinition::new("com.acme.LoggingInterceptor")
            .with_binding(Marker::new("com.acme.Logged"))
            .with_phase(InterceptionType::AroundInvoke)
            .with_priority(10);
        assert!(def.enabled);
        assert!(def.intercepts(InterceptionType::AroundInvoke));
        assert!(!def.intercepts(InterceptionType::PostConstruct));
        assert_eq!(def.priority, 10);
    }

    #[test]
    fn test_definition_defaults_on_deserialize() {
        let def: InterceptorDefinition =
            serde_json::from_str(r#"{"class": "com.acme.AuditInterceptor"}"#).unwrap();
        assert!(def.enabled);
        assert!(def.bindings.is_empty());
        assert_eq!(def.priority, 0);
    }

    #[test]
    fn test_target_class_requires_model() {
        let target = TargetClassMetadata::new("com.acme.Greeter", [InterceptionType::PostConstruct]);
        assert!(target.is_eligible(InterceptionType::PostConstruct));
        assert!(!target.requires_model());

        let target = TargetClassMetadata::new("com.acme.Greeter", [InterceptionType::PrePassivate]);
        assert!(target.requires_model());
    }
}

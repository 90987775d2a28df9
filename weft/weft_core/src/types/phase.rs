//! Interception phases.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A lifecycle or invocation point an interceptor can wrap.
///
/// The set is closed. `ALL` lists the phases in declaration order, which is
/// also the order in which class-level explicit interceptors are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterceptionType {
    /// Wraps construction of the component instance.
    AroundConstruct,

    /// Runs after dependency injection completes.
    PostConstruct,

    /// Runs before the instance is destroyed.
    PreDestroy,

    /// Runs before the instance is passivated.
    PrePassivate,

    /// Runs after the instance is activated.
    PostActivate,

    /// Wraps business method invocations.
    AroundInvoke,

    /// Wraps timeout callbacks.
    AroundTimeout,
}

impl InterceptionType {
    /// All phases in declaration order.
    pub const ALL: [InterceptionType; 7] = [
        Self::AroundConstruct,
        Self::PostConstruct,
        Self::PreDestroy,
        Self::PrePassivate,
        Self::PostActivate,
        Self::AroundInvoke,
        Self::AroundTimeout,
    ];

    /// Lifecycle callbacks resolved against the class-level binding set.
    pub const CLASS_LIFECYCLE: [InterceptionType; 4] = [
        Self::PostConstruct,
        Self::PreDestroy,
        Self::PrePassivate,
        Self::PostActivate,
    ];

    /// Phases resolved per business method.
    pub const BUSINESS: [InterceptionType; 2] = [Self::AroundInvoke, Self::AroundTimeout];

    /// Whether a target class hook for this phase forces a model to exist even
    /// without any external interceptor.
    pub fn requires_self_interception(&self) -> bool {
        matches!(
            self,
            Self::AroundInvoke | Self::AroundTimeout | Self::PrePassivate | Self::PostActivate
        )
    }

    /// Get the name of this phase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AroundConstruct => "around_construct",
            Self::PostConstruct => "post_construct",
            Self::PreDestroy => "pre_destroy",
            Self::PrePassivate => "pre_passivate",
            Self::PostActivate => "post_activate",
            Self::AroundInvoke => "around_invoke",
            Self::AroundTimeout => "around_timeout",
        }
    }
}

impl fmt::Display for InterceptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterceptionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|phase| phase.as_str() == normalized)
            .ok_or_else(|| format!("unknown interception type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_interception_phases() {
        assert!(InterceptionType::AroundInvoke.requires_self_interception());
        assert!(InterceptionType::PrePassivate.requires_self_interception());
        assert!(!InterceptionType::PostConstruct.requires_self_interception());
        assert!(!InterceptionType::AroundConstruct.requires_self_interception());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "around-invoke".parse::<InterceptionType>().unwrap(),
            InterceptionType::AroundInvoke
        );
        assert_eq!(
            "POST_CONSTRUCT".parse::<InterceptionType>().unwrap(),
            InterceptionType::PostConstruct
        );
        assert!("around_everything".parse::<InterceptionType>().is_err());
    }

    #[test]
    fn test_serialization() {
        let serialized = serde_json::to_string(&InterceptionType::AroundTimeout).unwrap();
        assert_eq!(serialized, "\"around_timeout\"");
        let deserialized: InterceptionType = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, InterceptionType::AroundTimeout);
    }
}

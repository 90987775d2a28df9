//! Logging utilities.
//!
//! Diagnostics are structured records of notable decisions the engine makes
//! while building a model, such as skipping interception of a final method.
//! They are emitted through the `log` facade and can also be retained for
//! inspection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::id::TypeName;
use crate::types::{InterceptionType, MethodSignature};

/// Log level, ordered by increasing severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    /// Verbose debug information.
    Trace,

    /// Debug information.
    Debug,

    /// Informational messages.
    Info,

    /// Warning messages.
    Warning,

    /// Error messages.
    Error,
}

impl LogLevel {
    /// Get the name of this log level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }

    /// Check if this log level is at least as severe as the given level.
    pub fn is_at_least(&self, level: LogLevel) -> bool {
        *self >= level
    }

    /// The corresponding `log` crate level.
    pub fn to_log_level(&self) -> log::Level {
        match self {
            Self::Trace => log::Level::Trace,
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
            Self::Warning => log::Level::Warn,
            Self::Error => log::Level::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = ();

    /// Convert from a case-insensitive string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "err" => Ok(Self::Error),
            _ => Err(()),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a diagnostic reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Interception of a final method was skipped because its declaring class
    /// matches the configured ignore pattern.
    FinalMethodSkipped {
        /// The skipped method.
        method: MethodSignature,
        /// The interceptor that was not applied.
        interceptor: TypeName,
        /// The phase it would have been applied in.
        phase: InterceptionType,
    },

    /// A model was built and published.
    ModelPublished {
        /// Number of distinct interceptor classes in the model.
        interceptors: usize,
    },

    /// No model was built because nothing intercepts the component.
    ModelSkipped,
}

impl DiagnosticKind {
    /// Default severity for this kind.
    pub fn level(&self) -> LogLevel {
        match self {
            Self::FinalMethodSkipped { .. } => LogLevel::Warning,
            Self::ModelPublished { .. } => LogLevel::Debug,
            Self::ModelSkipped => LogLevel::Trace,
        }
    }
}

/// A diagnostic recorded while building a component's model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The component the diagnostic belongs to.
    pub component: TypeName,

    /// Severity.
    pub level: LogLevel,

    /// What happened.
    pub kind: DiagnosticKind,

    /// Human-readable message.
    pub message: String,

    /// When the diagnostic was recorded.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Diagnostic {
    /// Create a diagnostic with the kind's default level and a generated message.
    pub fn new(component: impl Into<TypeName>, kind: DiagnosticKind) -> Self {
        let component = component.into();
        let message = match &kind {
            DiagnosticKind::FinalMethodSkipped {
                method,
                interceptor,
                phase,
            } => format!(
                "Final method {} is not intercepted by {} ({}); declaring class is configured to ignore final methods",
                method, interceptor, phase
            ),
            DiagnosticKind::ModelPublished { interceptors } => format!(
                "Interception model for {} published with {} interceptor(s)",
                component, interceptors
            ),
            DiagnosticKind::ModelSkipped => {
                format!("{} has no interceptors, no model built", component)
            }
        };

        Self {
            component,
            level: kind.level(),
            kind,
            message,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Emit this diagnostic through the `log` facade.
    pub fn emit(&self) {
        log::log!(target: "weft::interception", self.level.to_log_level(), "{}", self.message);
    }

    /// Format this diagnostic for display.
    pub fn format(&self) -> String {
        format!(
            "{} [{}] {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
            self.level,
            self.component,
            self.message
        )
    }
}

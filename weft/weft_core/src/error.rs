//! Error types for the Weft interception engine.
//!
//! Errors are organized by concern. `InterceptionError` is the closed set of
//! validation failures raised while an interception model is built; every one
//! of them is fatal for the component type being initialized. Conditions that
//! only degrade behavior (such as a final method whose interception is
//! configured to be ignored) are never errors: they are reported through
//! diagnostics instead.
//!
//! The root error type, `Error`, wraps each of the concern-specific errors so
//! callers can propagate with `?` and still branch on the precise kind.

use crate::id::TypeName;
use crate::types::MethodSignature;
use thiserror::Error;

/// Root error type for Weft.
#[derive(Debug, Error)]
pub enum Error {
    /// Interception model construction failed
    #[error("Interception error: {0}")]
    Interception(#[from] InterceptionError),

    /// Model registry errors
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Validation failures raised while building an interception model.
///
/// All variants abort initialization of the whole component type. Re-running
/// with the same input always produces the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterceptionError {
    /// Two distinct markers of the same binding type were declared on one element
    #[error("Conflicting interceptor bindings of type {binding_type} found on {component}")]
    ConflictingBindings {
        /// The component type owning the element
        component: TypeName,

        /// The binding type that appeared more than once
        binding_type: TypeName,
    },

    /// A final component type has interceptors
    #[error("Final component type {component} declares or inherits interceptors")]
    FinalTypeNotInterceptable {
        /// The final component type
        component: TypeName,
    },

    /// A final business method has interceptors
    #[error("Intercepted method {method} must not be final (bound interceptor: {interceptor})")]
    FinalMethodNotInterceptable {
        /// The final method
        method: MethodSignature,

        /// The first interceptor bound to the method
        interceptor: TypeName,
    },

    /// The designated constructor cannot be invoked by the proxy layer
    #[error("Component type {component} is not proxyable: constructor {constructor} is private")]
    InaccessibleConstructor {
        /// The component type
        component: TypeName,

        /// Display form of the constructor
        constructor: String,
    },

    /// The component type has no designated constructor
    #[error("Component type {component} has no designated constructor")]
    MissingConstructor {
        /// The component type
        component: TypeName,
    },
}

impl InterceptionError {
    /// The component type this error is attributed to, if it names one.
    pub fn component(&self) -> Option<&TypeName> {
        match self {
            Self::ConflictingBindings { component, .. }
            | Self::FinalTypeNotInterceptable { component }
            | Self::InaccessibleConstructor { component, .. }
            | Self::MissingConstructor { component } => Some(component),
            Self::FinalMethodNotInterceptable { .. } => None,
        }
    }
}

/// Errors related to the published model registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A model was already published under this key
    #[error("Interception model already published for {0}")]
    AlreadyPublished(TypeName),
}

/// Errors related to configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration source
    #[error("Failed to load configuration: {0}")]
    Load(String),

    /// Failed to parse the configuration source
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Configuration parsed but holds an invalid value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type used throughout Weft.
pub type Result<T> = std::result::Result<T, Error>;

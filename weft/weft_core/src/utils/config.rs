//! Configuration for interception model construction.
//!
//! The engine reads a single behavioral option: whether interception of final
//! methods is ignored (skipped with a diagnostic) rather than rejected, for
//! declaring classes whose name matches a pattern. The pattern is a regular
//! expression matched against the whole class name.
//!
//! Configuration is loaded from TOML:
//!
//! ```toml
//! ignore_final_methods = "com\\.acme\\.legacy\\..*"
//! max_diagnostics_per_component = 50
//! ```

use std::path::Path;

use log::{info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Environment variable overriding `ignore_final_methods`.
pub const IGNORE_FINAL_METHODS_ENV: &str = "WEFT_IGNORE_FINAL_METHODS";

/// Interception configuration.
///
/// Deserializing validates the configuration, so the ignore pattern is
/// compiled however the configuration was obtained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawInterceptionConfig")]
pub struct InterceptionConfig {
    /// Pattern of declaring class names whose final methods are skipped
    /// instead of rejected when interceptors are bound to them.
    #[serde(default)]
    pub ignore_final_methods: Option<String>,

    /// Maximum number of diagnostics retained per component type.
    #[serde(default = "default_max_diagnostics")]
    pub max_diagnostics_per_component: usize,

    /// Compiled form of `ignore_final_methods`.
    #[serde(skip)]
    final_method_pattern: Option<Regex>,
}

fn default_max_diagnostics() -> usize {
    100
}

/// Interception configuration as written, before validation.
#[derive(Deserialize)]
struct RawInterceptionConfig {
    #[serde(default)]
    ignore_final_methods: Option<String>,

    #[serde(default = "default_max_diagnostics")]
    max_diagnostics_per_component: usize,
}

impl TryFrom<RawInterceptionConfig> for InterceptionConfig {
    type Error = crate::Error;

    fn try_from(raw: RawInterceptionConfig) -> Result<Self> {
        let mut config = InterceptionConfig {
            ignore_final_methods: raw.ignore_final_methods,
            max_diagnostics_per_component: raw.max_diagnostics_per_component,
            final_method_pattern: None,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for InterceptionConfig {
    fn default() -> Self {
        Self {
            ignore_final_methods: None,
            max_diagnostics_per_component: default_max_diagnostics(),
            final_method_pattern: None,
        }
    }
}

impl PartialEq for InterceptionConfig {
    fn eq(&self, other: &Self) -> bool {
        self.ignore_final_methods == other.ignore_final_methods
            && self.max_diagnostics_per_component == other.max_diagnostics_per_component
    }
}

impl InterceptionConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the final-method ignore pattern.
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - The configuration with the compiled pattern.
    /// * `Err` - If the pattern is not a valid regular expression.
    pub fn with_ignore_final_methods(mut self, pattern: impl Into<String>) -> Result<Self> {
        self.ignore_final_methods = Some(pattern.into());
        self.validate()?;
        Ok(self)
    }

    /// Parse configuration from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()).into())
    }

    /// Load configuration from a file.
    ///
    /// Without a path, or when the file does not exist, the defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            info!("No interception configuration specified, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            warn!("Interception configuration not found: {}", path.display());
            return Ok(Self::default());
        }

        info!("Loading interception configuration from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Load(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::from_toml_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(self) -> Result<Self> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(pattern) = lookup(IGNORE_FINAL_METHODS_ENV) {
            let pattern = pattern.trim();
            self.ignore_final_methods = if pattern.is_empty() {
                None
            } else {
                Some(pattern.to_string())
            };
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration and compile the ignore pattern.
    pub fn validate(&mut self) -> Result<()> {
        if self.max_diagnostics_per_component == 0 {
            return Err(ConfigError::Invalid(
                "max_diagnostics_per_component cannot be zero".to_string(),
            )
            .into());
        }

        self.final_method_pattern = match &self.ignore_final_methods {
            Some(pattern) => Some(Regex::new(&format!("^(?:{})$", pattern)).map_err(|e| {
                ConfigError::Invalid(format!("ignore_final_methods is not a valid pattern: {}", e))
            })?),
            None => None,
        };

        Ok(())
    }

    /// Whether interception of final methods declared by `class_name` is
    /// ignored rather than rejected.
    pub fn is_final_method_ignored(&self, class_name: &str) -> bool {
        self.final_method_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(class_name))
    }

    /// Merge with another configuration; set values in `other` win.
    ///
    /// The merged configuration is validated again, which recompiles the
    /// ignore pattern.
    pub fn merge(&mut self, other: InterceptionConfig) -> Result<()> {
        if other.ignore_final_methods.is_some() {
            self.ignore_final_methods = other.ignore_final_methods;
        }

        if other.max_diagnostics_per_component != default_max_diagnostics() {
            self.max_diagnostics_per_component = other.max_diagnostics_per_component;
        }

        self.validate()
    }
}

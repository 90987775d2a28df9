//! Type names.
//!
//! Every class the engine reasons about (component types, binding types,
//! stereotypes, interceptor classes) is identified by its fully-qualified
//! name. `TypeName` wraps that name and knows how to derive the erased key
//! under which interception models are published.
//!
//! # Examples
//!
//! ```
//! use weft_core::id::TypeName;
//!
//! let name = TypeName::new("com.acme.Repository<com.acme.Order>");
//! assert_eq!(name.erased().as_str(), "com.acme.Repository");
//! assert_eq!(name.simple_name(), "Repository");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully-qualified type name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    /// Create a type name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The full name as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical erased identity of this type.
    ///
    /// Type arguments are dropped, so `Repo<Order>` and `Repo<Invoice>` share
    /// the key `Repo`.
    pub fn erased(&self) -> TypeName {
        match self.0.find('<') {
            Some(idx) => TypeName(self.0[..idx].trim_end().to_string()),
            None => self.clone(),
        }
    }

    /// The unqualified name, without package and type arguments.
    pub fn simple_name(&self) -> &str {
        let raw = match self.0.find('<') {
            Some(idx) => &self.0[..idx],
            None => &self.0,
        };
        raw.rsplit(|c: char| c == '.' || c == '$').next().unwrap_or(raw)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("type name must not be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl From<&str> for TypeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TypeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

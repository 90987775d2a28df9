//! Metadata markers.
//!
//! A marker is a tag type plus attribute values attached to a class,
//! constructor or method. Markers are compared by full value: two markers of
//! the same tag type with different attributes are different bindings. Override
//! decisions only look at the tag type.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::id::TypeName;

/// Effective class-level bindings, one marker per binding type.
pub type BindingMap = BTreeMap<TypeName, Marker>;

/// A set of binding markers compared by full value.
pub type BindingSet = BTreeSet<Marker>;

/// A metadata tag with attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Marker {
    /// The tag type.
    pub kind: TypeName,

    /// Attribute values by attribute name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Marker {
    /// Create a marker without attributes.
    pub fn new(kind: impl Into<TypeName>) -> Self {
        Self {
            kind: kind.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add an attribute value.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.kind.simple_name())?;
        if !self.attributes.is_empty() {
            let attrs = self
                .attributes
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "({})", attrs)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_value_equality() {
        let a = Marker::new("com.acme.Logged").with_attribute("level", "debug");
        let b = Marker::new("com.acme.Logged").with_attribute("level", "info");
        let c = Marker::new("com.acme.Logged").with_attribute("level", "debug");

        assert_ne!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.kind, b.kind);

        let set: BindingSet = [a.clone(), b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        let marker = Marker::new("com.acme.Logged");
        assert_eq!(marker.to_string(), "@Logged");

        let marker = marker.with_attribute("level", "debug");
        assert_eq!(marker.to_string(), "@Logged(level=debug)");
        assert_eq!(marker.attribute("level"), Some("debug"));
    }

    #[test]
    fn test_serialization() {
        let marker = Marker::new("com.acme.Secured").with_attribute("role", "admin");
        let serialized = serde_json::to_string(&marker).unwrap();
        let deserialized: Marker = serde_json::from_str(&serialized).unwrap();
        assert_eq!(marker, deserialized);

        let bare: Marker = serde_json::from_str(r#"{"kind":"com.acme.Logged"}"#).unwrap();
        assert!(bare.attributes.is_empty());
    }
}

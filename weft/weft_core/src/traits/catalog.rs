//! Binding catalog trait.

use crate::id::TypeName;
use crate::types::Marker;

/// Knowledge about binding types and stereotypes.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use weft_core::traits::BindingCatalog;
/// use weft_core::types::Marker;
/// use weft_core::TypeName;
///
/// struct Fixed(HashMap<TypeName, Vec<Marker>>);
///
/// impl BindingCatalog for Fixed {
///     fn is_binding_type(&self, kind: &TypeName) -> bool {
///         self.0.contains_key(kind)
///     }
///
///     fn inherited_bindings(&self, kind: &TypeName) -> Vec<Marker> {
///         self.0.get(kind).cloned().unwrap_or_default()
///     }
///
///     fn stereotype_definition(&self, _kind: &TypeName) -> Option<Vec<Marker>> {
///         None
///     }
/// }
///
/// let mut bindings = HashMap::new();
/// bindings.insert(TypeName::new("com.acme.Logged"), Vec::new());
/// let catalog = Fixed(bindings);
/// assert!(catalog.is_binding_type(&TypeName::new("com.acme.Logged")));
/// assert!(!catalog.is_stereotype(&TypeName::new("com.acme.Logged")));
/// ```
pub trait BindingCatalog: Send + Sync {
    /// Whether markers of this tag type declare interceptor bindings.
    fn is_binding_type(&self, kind: &TypeName) -> bool;

    /// Bindings declared on the binding type itself.
    ///
    /// A binding carrying these is equivalent to declaring them alongside it.
    /// Only direct meta-bindings are returned; callers expand transitively.
    fn inherited_bindings(&self, kind: &TypeName) -> Vec<Marker>;

    /// The markers bundled by a stereotype, or `None` if `kind` is not a
    /// stereotype. A definition may itself contain stereotype markers.
    fn stereotype_definition(&self, kind: &TypeName) -> Option<Vec<Marker>>;

    /// Whether `kind` is a stereotype.
    fn is_stereotype(&self, kind: &TypeName) -> bool {
        self.stereotype_definition(kind).is_some()
    }
}

//! Class-level binding collection.
//!
//! The effective class-level bindings of a component are its directly declared
//! bindings plus the bindings inherited through stereotypes, whether declared
//! on the class or on the owning bean. Direct bindings win over inherited ones
//! of the same tag type.

use std::collections::{BTreeSet, VecDeque};

use log::{debug, trace};
use weft_core::traits::BindingCatalog;
use weft_core::types::{BindingMap, ComponentType, Marker, OwnerBean};
use weft_core::{InterceptionError, Result, TypeName};

use super::merger::{filter_bindings, flatten_bindings};

/// Collect the effective class-level bindings of `component`.
///
/// # Arguments
///
/// * `catalog` - Binding type and stereotype definitions.
/// * `component` - The component type.
/// * `owner` - The owning bean, whose stereotypes also contribute bindings.
///
/// # Returns
///
/// * `Ok(BindingMap)` - One binding per tag type.
/// * `Err` - `ConflictingBindings` if the direct bindings, or the inherited
///   bindings not overridden by a direct one, contain two different values of
///   one tag type.
pub fn collect_class_bindings(
    catalog: &dyn BindingCatalog,
    component: &ComponentType,
    owner: Option<&OwnerBean>,
) -> Result<BindingMap> {
    let direct = flatten_bindings(catalog, filter_bindings(catalog, &component.markers));

    let mut bindings = BindingMap::new();
    for binding in direct {
        insert_unique(&mut bindings, &component.name, binding)?;
    }

    let inherited = flatten_bindings(
        catalog,
        stereotype_bindings(catalog, component, owner),
    );

    let mut inherited_bindings = BindingMap::new();
    for binding in inherited {
        if bindings.contains_key(&binding.kind) {
            trace!("{}: direct binding overrides inherited {}", component.name, binding);
            continue;
        }
        insert_unique(&mut inherited_bindings, &component.name, binding)?;
    }

    bindings.extend(inherited_bindings);
    debug!(
        "{}: {} class-level binding(s)",
        component.name,
        bindings.len()
    );

    Ok(bindings)
}

/// Binding markers reachable from the component's stereotypes.
///
/// Stereotypes may declare further stereotypes; each one is expanded once.
fn stereotype_bindings(
    catalog: &dyn BindingCatalog,
    component: &ComponentType,
    owner: Option<&OwnerBean>,
) -> Vec<Marker> {
    let mut pending: VecDeque<TypeName> = component
        .markers
        .iter()
        .filter(|marker| catalog.is_stereotype(&marker.kind))
        .map(|marker| marker.kind.clone())
        .collect();
    if let Some(owner) = owner {
        pending.extend(owner.stereotypes.iter().cloned());
    }

    let mut visited = BTreeSet::new();
    let mut bindings = Vec::new();

    while let Some(stereotype) = pending.pop_front() {
        if !visited.insert(stereotype.clone()) {
            continue;
        }

        let Some(definition) = catalog.stereotype_definition(&stereotype) else {
            continue;
        };

        for marker in definition {
            if catalog.is_stereotype(&marker.kind) {
                pending.push_back(marker.kind);
            } else if catalog.is_binding_type(&marker.kind) {
                bindings.push(marker);
            }
        }
    }

    bindings
}

fn insert_unique(bindings: &mut BindingMap, component: &TypeName, binding: Marker) -> Result<()> {
    match bindings.get(&binding.kind) {
        Some(existing) if existing != &binding => Err(InterceptionError::ConflictingBindings {
            component: component.clone(),
            binding_type: binding.kind,
        }
        .into()),
        Some(_) => Ok(()),
        None => {
            bindings.insert(binding.kind.clone(), binding);
            Ok(())
        }
    }
}

//! Member binding merger.
//!
//! Member-level bindings (on a constructor or method) override class-level
//! bindings of the same tag type rather than adding to them. Within one member
//! each tag type may appear only once after flattening.

use std::collections::BTreeSet;

use log::trace;
use weft_core::traits::BindingCatalog;
use weft_core::types::{BindingMap, BindingSet, Marker};
use weft_core::{InterceptionError, Result, TypeName};

/// Keep the markers whose tag type is a binding type, in order.
pub fn filter_bindings<'a>(
    catalog: &dyn BindingCatalog,
    markers: impl IntoIterator<Item = &'a Marker>,
) -> Vec<Marker> {
    markers
        .into_iter()
        .filter(|marker| catalog.is_binding_type(&marker.kind))
        .cloned()
        .collect()
}

/// Expand bindings with their inherited bindings, transitively.
///
/// Every binding is followed by the bindings it inherits, depth first.
/// Identical markers collapse; a marker already visited is not expanded again,
/// which also stops cycles.
pub fn flatten_bindings(catalog: &dyn BindingCatalog, bindings: Vec<Marker>) -> Vec<Marker> {
    let mut visited = BTreeSet::new();
    let mut flattened = Vec::new();

    // Stack holds pending markers in reverse so pops follow declaration order
    let mut stack: Vec<Marker> = bindings.into_iter().rev().collect();
    while let Some(binding) = stack.pop() {
        if !visited.insert(binding.clone()) {
            continue;
        }

        let inherited = catalog.inherited_bindings(&binding.kind);
        stack.extend(
            inherited
                .into_iter()
                .filter(|marker| catalog.is_binding_type(&marker.kind))
                .rev(),
        );
        flattened.push(binding);
    }

    flattened
}

/// Merge a member's bindings over the class-level bindings.
///
/// # Arguments
///
/// * `catalog` - Binding type definitions.
/// * `component` - The component type owning the member, named in errors.
/// * `class_bindings` - The effective class-level bindings. Not modified.
/// * `member_markers` - All markers declared on the member.
///
/// # Returns
///
/// * `Ok(BindingSet)` - The merged bindings.
/// * `Err` - `ConflictingBindings` if one tag type appears twice with
///   different values on the member.
pub fn merge_member_bindings(
    catalog: &dyn BindingCatalog,
    component: &TypeName,
    class_bindings: &BindingMap,
    member_markers: &[Marker],
) -> Result<BindingSet> {
    let member_bindings = flatten_bindings(catalog, filter_bindings(catalog, member_markers));

    let mut merged = class_bindings.clone();
    let mut processed = BTreeSet::new();

    for binding in member_bindings {
        if !processed.insert(binding.kind.clone()) {
            return Err(InterceptionError::ConflictingBindings {
                component: component.clone(),
                binding_type: binding.kind,
            }
            .into());
        }

        if let Some(overridden) = merged.insert(binding.kind.clone(), binding) {
            trace!("{}: member binding overrides {}", component, overridden);
        }
    }

    Ok(merged.into_values().collect())
}

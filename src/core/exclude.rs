//! Scope resolution: which components remain in play for a query.

use tracing::trace;

use crate::types::Component;

/// Compute the ordered components to check for a target and an exclusion set.
///
/// 1. Composites in `exclusions` are replaced by their leaves.
/// 2. Every composite with an excluded leaf is excluded as well.
/// 3. The sequence is cut after `target` (whole sequence when `None`).
/// 4. Excluded components are filtered out, order preserved.
///
/// # Examples
///
/// ```
/// use url_relation::{resolve_scope, Component};
///
/// let scope = resolve_scope(&[Component::Username], Some(Component::Hostname));
/// assert_eq!(
///     scope,
///     vec![
///         Component::Protocol,
///         Component::Password,
///         Component::Tld,
///         Component::Domain,
///         Component::Subdomain,
///         Component::Hostname,
///     ]
/// );
/// ```
pub fn resolve_scope(exclusions: &[Component], target: Option<Component>) -> Vec<Component> {
    let excluded = cascade(&expand(exclusions));

    let sequence: &[Component] = &Component::SEQUENCE;
    let sequence = match target {
        Some(target) => &sequence[..=target.index()],
        None => sequence,
    };

    let scope: Vec<Component> = sequence
        .iter()
        .copied()
        .filter(|component| !excluded.contains(component))
        .collect();

    trace!(?exclusions, ?target, ?scope, "resolved component scope");
    scope
}

/// Replace composites with their leaves, keeping first occurrences only.
fn expand(exclusions: &[Component]) -> Vec<Component> {
    let mut expanded = Vec::with_capacity(exclusions.len());

    for component in exclusions.iter().flat_map(|c| c.leaves()) {
        if !expanded.contains(&component) {
            expanded.push(component);
        }
    }

    expanded
}

/// Add every composite that depends on an excluded leaf.
fn cascade(exclusions: &[Component]) -> Vec<Component> {
    let mut cascaded = exclusions.to_vec();

    for composite in Component::COMPOSITES {
        let any_leaf = composite.leaves().iter().any(|leaf| exclusions.contains(leaf));

        if any_leaf && !cascaded.contains(&composite) {
            cascaded.push(composite);
        }
    }

    cascaded
}

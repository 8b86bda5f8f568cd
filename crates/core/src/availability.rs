//! Candidate narrowing for upstream-dependent wizard steps.
//!
//! Each step that depends on an earlier choice offers only the catalog
//! entries compatible with that choice. Two compatibility shapes exist:
//!
//! - a direct reference on the entity itself (model → structure type),
//!   filtered by equality via [`filter_by_reference`];
//! - a many-to-many association recorded as link pairs (coverage type ↔
//!   structure type), filtered by membership via [`filter_by_links`].
//!
//! When no upstream selection has been made yet, both filters return the
//! unfiltered full set, so early steps have something to display. Callers
//! that re-narrow a set after an upstream change use
//! [`retain_if_available`] (or `ConfigurationDraft::with_structure_change`)
//! to drop a downstream selection the narrowed set no longer contains.

use crate::types::EntityId;

/// One row of a many-to-many compatibility association.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompatibilityLink {
    /// The downstream option (e.g. a coverage type).
    pub option_id: EntityId,
    /// The upstream entity it is compatible with (e.g. a structure type).
    pub upstream_id: EntityId,
}

/// Filter options by a direct reference to the upstream selection.
///
/// `reference` extracts the upstream id an option points at. With no
/// upstream selection the full set is returned unchanged.
pub fn filter_by_reference<T>(
    options: Vec<T>,
    upstream: Option<EntityId>,
    reference: impl Fn(&T) -> EntityId,
) -> Vec<T> {
    match upstream {
        Some(id) => options.into_iter().filter(|o| reference(o) == id).collect(),
        None => options,
    }
}

/// Filter options by membership in a many-to-many association.
///
/// An option survives when a link pairs its id with the upstream
/// selection. With no upstream selection the full set is returned
/// unchanged.
pub fn filter_by_links<T>(
    options: Vec<T>,
    upstream: Option<EntityId>,
    links: &[CompatibilityLink],
    id: impl Fn(&T) -> EntityId,
) -> Vec<T> {
    let Some(upstream_id) = upstream else {
        return options;
    };

    options
        .into_iter()
        .filter(|o| {
            let option_id = id(o);
            links
                .iter()
                .any(|l| l.option_id == option_id && l.upstream_id == upstream_id)
        })
        .collect()
}

/// Keep a downstream selection only while the narrowed candidate set still
/// contains it.
pub fn retain_if_available(
    selected: Option<EntityId>,
    available: &[EntityId],
) -> Option<EntityId> {
    selected.filter(|id| available.contains(id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq)]
    struct Opt {
        id: EntityId,
        parent: EntityId,
    }

    fn opt(parent: EntityId) -> Opt {
        Opt {
            id: Uuid::new_v4(),
            parent,
        }
    }

    // -- filter_by_reference --

    #[test]
    fn reference_filter_keeps_only_matching_parent() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let options = vec![opt(s1), opt(s1), opt(s2)];

        let filtered = filter_by_reference(options, Some(s1), |o| o.parent);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|o| o.parent == s1));
    }

    #[test]
    fn reference_filter_without_upstream_is_permissive() {
        let options = vec![opt(Uuid::new_v4()), opt(Uuid::new_v4())];
        let all = filter_by_reference(options.clone(), None, |o| o.parent);
        assert_eq!(all, options);
    }

    #[test]
    fn reference_filter_can_empty_the_set() {
        let options = vec![opt(Uuid::new_v4())];
        let filtered = filter_by_reference(options, Some(Uuid::new_v4()), |o| o.parent);
        assert!(filtered.is_empty());
    }

    // -- filter_by_links --

    #[test]
    fn link_filter_keeps_only_linked_options() {
        let s1 = Uuid::new_v4();
        let a = opt(s1);
        let b = opt(s1);
        let links = vec![CompatibilityLink {
            option_id: a.id,
            upstream_id: s1,
        }];

        let filtered = filter_by_links(vec![a.clone(), b], Some(s1), &links, |o| o.id);

        assert_eq!(filtered, vec![a]);
    }

    #[test]
    fn link_filter_without_upstream_is_permissive() {
        let options = vec![opt(Uuid::new_v4()), opt(Uuid::new_v4())];
        let all = filter_by_links(options.clone(), None, &[], |o| o.id);
        assert_eq!(all, options);
    }

    #[test]
    fn link_filter_ignores_links_for_other_upstreams() {
        let s1 = Uuid::new_v4();
        let s2 = Uuid::new_v4();
        let a = opt(s1);
        let links = vec![CompatibilityLink {
            option_id: a.id,
            upstream_id: s2,
        }];

        let filtered = filter_by_links(vec![a], Some(s1), &links, |o| o.id);
        assert!(filtered.is_empty());
    }

    // -- retain_if_available --

    #[test]
    fn retains_selection_still_in_set() {
        let m = Uuid::new_v4();
        assert_eq!(retain_if_available(Some(m), &[m, Uuid::new_v4()]), Some(m));
    }

    #[test]
    fn clears_selection_no_longer_in_set() {
        assert_eq!(retain_if_available(Some(Uuid::new_v4()), &[]), None);
    }

    #[test]
    fn no_selection_stays_empty() {
        assert_eq!(retain_if_available(None, &[Uuid::new_v4()]), None);
    }
}

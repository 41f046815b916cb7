// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet matching: how many of the requested facets does one item satisfy?
//!
//! The policy is soft. An item that lacks a requested facet altogether is
//! not thrown out here - it just fails to earn the point for that facet.
//! Whether a zero-match item survives is the ranking pipeline's call (it
//! drops them whenever any filter was given). This keeps the matcher a pure
//! counter and the exclusion policy in exactly one place.
//!
//! **Invariant**: `matched <= total_asked`. Each requested facet key
//! contributes at most one point, no matter how many of its values overlap.

use crate::types::{CatalogItem, DomainPack, Filters};
use crate::vocab::canonical_facet_value;

/// Outcome of matching one item against the requested filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FacetMatch {
    /// Requested facets the item satisfied.
    pub matched: usize,
    /// Requested facets with a non-empty value list.
    pub total_asked: usize,
}

/// Count how many requested facets `item` satisfies.
///
/// For every facet key with a non-empty requested-value list:
/// - `total_asked` goes up by one.
/// - Requested values and the item's values for that facet are both
///   canonicalized (global synonyms, then facet-scoped synonyms; scalars
///   wrapped as one-element sequences).
/// - The facet matches when the two canonical sets intersect; `matched`
///   goes up by one. An item without the facet simply doesn't match it.
///
/// # Example
///
/// ```ignore
/// // filters: { color: ["Ruby"] }, pack: ruby → red
/// // item.facets: { color: "red" }
/// let m = match_facets(&item, &filters, &pack);
/// assert_eq!((m.matched, m.total_asked), (1, 1));
/// ```
pub fn match_facets(item: &CatalogItem, filters: &Filters, pack: &DomainPack) -> FacetMatch {
    let mut result = FacetMatch::default();

    for (facet_key, requested) in filters {
        if requested.is_empty() {
            continue;
        }
        result.total_asked += 1;

        let Some(item_value) = item.facets.get(facet_key) else {
            continue;
        };

        let wanted: Vec<String> = requested
            .iter()
            .map(|raw| canonical_facet_value(raw, facet_key, pack))
            .collect();

        let hit = item_value
            .as_slice()
            .iter()
            .map(|raw| canonical_facet_value(raw, facet_key, pack))
            .any(|have| wanted.contains(&have));

        if hit {
            result.matched += 1;
        }
    }

    debug_assert!(result.matched <= result.total_asked);
    result
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request diagnostics: which parts of the filters the vocabulary has never
//! heard of.
//!
//! This runs against the domain pack alone - the catalog is not consulted.
//! A request can produce a full page of results and *still* carry
//! diagnostics ("you asked for `colour`, the pack declares `color`"), which
//! is the point: surface input errors even when matching happens to succeed,
//! and report them identically when the catalog is empty.
//!
//! Unknown *values* are reported in their original spelling, not the folded
//! or synonym-resolved form. The user typed "Oakey"; telling them "oakey"
//! was not found is actionable, telling them the canonical form they never
//! typed is not.

use crate::types::{Diagnostics, DomainPack, Filters};
use crate::vocab::{canonical_facet_value, normalize_value};
use std::collections::HashSet;

/// Classify the requested filters against the pack's declared vocabulary.
///
/// - A requested facet key the pack does not declare lands in
///   `unknown_facet_keys` (even if its value list is empty - an unknown key
///   is a user error whether or not values came with it).
/// - For declared keys, each requested raw value is canonicalized (global
///   synonyms, then the facet's own table) and checked against the facet's
///   allowed set, itself built by folding the declared values through the
///   global synonym table. Misses are recorded raw, in request order.
///
/// Pure and catalog-independent: same filters + same pack = same output,
/// no matter what the catalog holds.
pub fn compute_diagnostics(filters: &Filters, pack: &DomainPack) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();

    for (facet_key, requested) in filters {
        let Some(def) = pack.facets.get(facet_key) else {
            diagnostics.unknown_facet_keys.push(facet_key.clone());
            continue;
        };

        if requested.is_empty() {
            continue;
        }

        let allowed: HashSet<String> = def
            .values
            .iter()
            .map(|v| normalize_value(v, pack))
            .collect();

        let misses: Vec<String> = requested
            .iter()
            .filter(|raw| {
                let canonical = canonical_facet_value(raw, facet_key, pack);
                !allowed.contains(&canonical)
            })
            .cloned()
            .collect();

        if !misses.is_empty() {
            diagnostics
                .unknown_facet_values
                .insert(facet_key.clone(), misses);
        }
    }

    diagnostics
}

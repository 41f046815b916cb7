// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind candidate scoring.
//!
//! Facet count dominates budget fit. An item matching two requested facets
//! over budget still beats an item matching one facet comfortably within it.
//! This sounds obvious, but it only holds because the bonus is strictly
//! smaller than one facet point.
//!
//! # Key Invariant: Facet Dominance
//!
//! ```text
//! matched + BUDGET_BONUS < matched + 1    (0.5 < 1.0)
//! ```
//!
//! # Constants
//!
//! | Constant     | Value | Why this value |
//! |--------------|-------|----------------|
//! | BUDGET_BONUS | 0.5   | Big enough to split ties between equal facet scores, small enough never to cross a whole-point boundary |
//!
//! Raising BUDGET_BONUS to 1.0 or above would let budget fit outrank a
//! strictly better facet match; the compile-time assertion below refuses to
//! build that configuration.

use crate::matching::FacetMatch;
use crate::types::{CatalogItem, ScoredCandidate};

/// Score bonus for an item whose price fits the requested budget.
pub const BUDGET_BONUS: f64 = 0.5;

// INVARIANT: FACET_DOMINANCE - the budget bonus must never cross a
// whole-point facet boundary. Evaluated at build time.
const _: () = {
    assert!(BUDGET_BONUS > 0.0);
    assert!(BUDGET_BONUS < 1.0);
};

/// Absolute distance between an item's price and the requested budget.
///
/// `+inf` when either side is missing, so priceless or budgetless
/// candidates always sort after priced ones under the budget-distance
/// tie-break - never before, and never interleaved.
pub fn budget_delta(price: Option<f64>, budget: Option<f64>) -> f64 {
    match (price, budget) {
        (Some(p), Some(b)) => (p - b).abs(),
        _ => f64::INFINITY,
    }
}

/// Compute the composite score for one item.
///
/// `score = matched` (one point per satisfied requested facet), plus
/// [`BUDGET_BONUS`] iff a budget was given, the item carries a numeric
/// price, and the price is within budget. Over-budget items are not
/// penalized - they just don't get the bonus.
///
/// `price_within_budget` is three-valued:
/// - `Some(true)` - priced, within budget (earned the bonus)
/// - `Some(false)` - priced, over budget
/// - `None` - indeterminate: no budget given and/or no price on the item.
///   Indeterminate items are never *marked* over-budget, but only
///   `Some(true)` satisfies the strict pass in the pipeline.
pub fn score_candidate<'a>(
    item: &'a CatalogItem,
    facets: FacetMatch,
    budget: Option<f64>,
) -> ScoredCandidate<'a> {
    let price_within_budget = match (budget, item.price) {
        (Some(b), Some(p)) => Some(p <= b),
        _ => None,
    };

    let mut score = facets.matched as f64;
    if price_within_budget == Some(true) {
        score += BUDGET_BONUS;
    }

    ScoredCandidate {
        item,
        score,
        matched: facets.matched,
        total_asked: facets.total_asked,
        price_within_budget,
        budget_delta: budget_delta(item.price, budget),
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Two-phase scoring, filtering, deterministic sort, and result shaping.
//!
//! One ranking call is strictly sequential: diagnostics → strict pass →
//! (conditionally) relaxed pass → sort → cap → shape. No state survives the
//! call, no retries beyond the single budget relaxation, no I/O.
//!
//! The strict/relaxed distinction is a single `enforce_budget` parameter on
//! one pass function, composed by one outer decision: if the strict pass
//! yielded nothing and a budget was given, run the pass again without the
//! budget gate and flag the result `budget_relaxed`. Keeping the policy in
//! two function calls (rather than a flag threaded through a loop) is what
//! makes it independently testable.
//!
//! # Edge cases modeled as data, never as errors
//!
//! | Input                    | Behavior                                   |
//! |--------------------------|--------------------------------------------|
//! | Empty catalog            | `EmptyCatalog` outcome, no scoring         |
//! | Empty filters            | every item passes the must-match gate      |
//! | Non-finite budget        | treated as "no budget constraint"          |
//! | Missing pack             | identity normalization, empty vocabulary   |
//! | Out-of-range limit       | clamped into `[1, 50]`, not rejected       |

use crate::diagnostics::compute_diagnostics;
use crate::matching::match_facets;
use crate::scoring::ranking::compare_candidates;
use crate::scoring::score_candidate;
use crate::types::{
    CatalogItem, Criteria, Diagnostics, DomainPack, EmptyCatalogOutcome, FailReason, Filters,
    NoMatchOutcome, RankOutcome, RankedOutcome, ScoredCandidate, TraceEntry,
};

/// Result cap when the caller does not ask for one.
pub const DEFAULT_LIMIT: usize = 10;

/// Smallest result cap a caller can get, whatever they asked for.
pub const MIN_LIMIT: usize = 1;

/// Largest result cap a caller can get, whatever they asked for.
pub const MAX_LIMIT: usize = 50;

/// Clamp a requested result cap into `[MIN_LIMIT, MAX_LIMIT]`.
///
/// Out-of-range requests are coerced, not rejected: `0` → 1, `1000` → 50,
/// `-3` → 1, absent → [`DEFAULT_LIMIT`].
pub fn clamp_limit(requested: Option<i64>) -> usize {
    match requested {
        None => DEFAULT_LIMIT,
        Some(n) => n.clamp(MIN_LIMIT as i64, MAX_LIMIT as i64) as usize,
    }
}

/// A non-finite budget is no budget. NaN compares false against every
/// price, and an infinite budget cannot produce a finite delta, so both
/// collapse to "unconstrained" before any scoring sees them.
fn sanitize_budget(budget: Option<f64>) -> Option<f64> {
    budget.filter(|b| b.is_finite())
}

/// Score every item and apply the keep-gate.
///
/// An item is kept when:
/// - `filters` is empty (no constraint - everything passes), OR it matched
///   at least one requested facet; AND
/// - if `enforce_budget` and a budget is present: its price is known to fit
///   (`price_within_budget == Some(true)`). Over-budget and priceless items
///   both fall to the relaxed pass.
fn score_pass<'a>(
    items: &'a [CatalogItem],
    filters: &Filters,
    budget: Option<f64>,
    pack: &DomainPack,
    enforce_budget: bool,
) -> Vec<ScoredCandidate<'a>> {
    let must_match = filters.values().any(|vs| !vs.is_empty());

    items
        .iter()
        .map(|item| score_candidate(item, match_facets(item, filters, pack), budget))
        .filter(|candidate| {
            if must_match && candidate.matched == 0 {
                return false;
            }
            if enforce_budget && budget.is_some() {
                return candidate.price_within_budget == Some(true);
            }
            true
        })
        .collect()
}

/// Rank `items` against the requested filters and optional budget.
///
/// The single operation this crate is built around (the providers load the
/// catalog and pack; this function only computes). Stateless and
/// deterministic: same inputs, same output, always.
///
/// # Example
///
/// ```ignore
/// let outcome = rank(&catalog.items, &filters, Some(15.0), Some(&pack), Some(5));
/// if let RankOutcome::Ranked(ranked) = outcome {
///     assert!(ranked.items.len() <= 5);
/// }
/// ```
pub fn rank(
    items: &[CatalogItem],
    filters: &Filters,
    budget: Option<f64>,
    pack: Option<&DomainPack>,
    limit: Option<i64>,
) -> RankOutcome {
    let limit_used = clamp_limit(limit);
    let budget = sanitize_budget(budget);

    let empty_pack = DomainPack::default();
    let pack = pack.unwrap_or(&empty_pack);

    let diagnostics = compute_diagnostics(filters, pack);

    if items.is_empty() {
        return RankOutcome::EmptyCatalog(EmptyCatalogOutcome {
            ok: false,
            reason: FailReason::EmptyCatalog,
            diagnostics,
            total: 0,
            items: Vec::new(),
            limit_used,
        });
    }

    // Pass 1: strict. Pass 2 only exists when the strict pass came back
    // empty with a budget in play.
    let mut budget_relaxed = false;
    let mut candidates = score_pass(items, filters, budget, pack, true);
    if candidates.is_empty() && budget.is_some() {
        budget_relaxed = true;
        candidates = score_pass(items, filters, budget, pack, false);
    }

    let criteria = Criteria {
        filters: filters.clone(),
        budget,
    };

    if candidates.is_empty() {
        return RankOutcome::NoMatch(NoMatchOutcome {
            ok: false,
            reason: FailReason::NoMatch,
            criteria,
            diagnostics,
            total: 0,
            items: Vec::new(),
            budget_relaxed,
            limit_used,
        });
    }

    // Vec::sort_by is stable, so equal keys keep catalog order until the
    // sku tie-break makes the question moot.
    candidates.sort_by(compare_candidates);

    let total = candidates.len();
    candidates.truncate(limit_used);

    let debug = candidates
        .iter()
        .map(|c| TraceEntry {
            sku: c.item.sku.clone(),
            score: c.score,
            matched_count: c.matched,
            total_asked: c.total_asked,
            budget_delta: c.budget_delta,
        })
        .collect();

    let items = candidates.into_iter().map(|c| c.item.clone()).collect();

    RankOutcome::Ranked(RankedOutcome {
        ok: true,
        criteria,
        diagnostics,
        total,
        items,
        debug,
        budget_relaxed,
        limit_used,
    })
}

/// Convenience wrapper when only the diagnostics are wanted.
///
/// Identical to the diagnostics carried by every [`rank`] outcome; exposed
/// for callers (like the `diagnose` subcommand) that have no catalog at
/// hand.
pub fn diagnose(filters: &Filters, pack: Option<&DomainPack>) -> Diagnostics {
    let empty_pack = DomainPack::default();
    compute_diagnostics(filters, pack.unwrap_or(&empty_pack))
}

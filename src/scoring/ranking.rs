// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate ordering: how ranked results get sorted.
//!
//! Four keys, applied in order, each one only consulted when every key
//! before it tied:
//!
//! 1. **Score** - descending. Facet matches plus budget bonus dominate.
//! 2. **Budget delta** - ascending. Between equal scores, closer to the
//!    budget wins. Priceless and budgetless candidates carry `+inf` here,
//!    so they land after every priced one.
//! 3. **Price** - ascending, missing price sorts last.
//! 4. **Name** - ascending, case-sensitive lexical.
//!
//! A fifth key, sku ascending, makes the order absolute: two distinct items
//! can share a name, and output order must never depend on catalog file
//! order.

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking.
///
/// Total for the values the pipeline produces: `score` is never NaN
/// (matched counts plus a constant bonus) and `budget_delta` is either
/// finite or `+inf`, both of which `partial_cmp` orders.
///
/// # Example
///
/// ```ignore
/// // Equal score, equal delta, equal price: name decides.
/// assert_eq!(compare_candidates(&alpha, &beta), Ordering::Less);
/// ```
pub fn compare_candidates(a: &ScoredCandidate<'_>, b: &ScoredCandidate<'_>) -> Ordering {
    // Primary: score (descending - higher score wins)
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => {
            // Secondary: budget delta (ascending - closer to budget wins)
            match a.budget_delta.partial_cmp(&b.budget_delta) {
                Some(ord) if ord != Ordering::Equal => ord,
                _ => {
                    // Tertiary: price (ascending, missing price sorts last)
                    let a_price = a.item.price.unwrap_or(f64::INFINITY);
                    let b_price = b.item.price.unwrap_or(f64::INFINITY);
                    match a_price.partial_cmp(&b_price) {
                        Some(ord) if ord != Ordering::Equal => ord,
                        _ => {
                            // Quaternary: name (ascending, case-sensitive)
                            match a.item.name.cmp(&b.item.name) {
                                Ordering::Equal => {
                                    // Final tie-breaker: sku for absolute determinism
                                    a.item.sku.cmp(&b.item.sku)
                                }
                                ord => ord,
                            }
                        }
                    }
                }
            }
        }
    }
}

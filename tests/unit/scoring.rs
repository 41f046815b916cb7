//! Score composition and the full comparator key chain.

use crate::common::{make_full_item, make_priced_item};
use facetrank::{
    budget_delta, compare_candidates, match_facets, score_candidate, Filters, BUDGET_BONUS,
    DomainPack,
};
use std::cmp::Ordering;

#[test]
fn score_is_matched_count_plus_bonus() {
    let pack = DomainPack::default();
    let item = make_full_item("W1", "Alpha", 10.0, &[("color", "red"), ("taste", "dry")]);
    let mut filters = Filters::new();
    filters.insert("color".to_string(), vec!["red".to_string()]);
    filters.insert("taste".to_string(), vec!["dry".to_string()]);

    let c = score_candidate(&item, match_facets(&item, &filters, &pack), Some(15.0));
    assert_eq!(c.score, 2.0 + BUDGET_BONUS);
}

#[test]
fn budget_delta_is_symmetric_around_the_budget() {
    assert_eq!(budget_delta(Some(10.0), Some(15.0)), 5.0);
    assert_eq!(budget_delta(Some(20.0), Some(15.0)), 5.0);
    assert!(budget_delta(None, Some(15.0)).is_infinite());
    assert!(budget_delta(Some(10.0), None).is_infinite());
}

#[test]
fn comparator_keys_engage_in_declared_order() {
    // Build two candidates that tie on progressively more keys and check
    // which key finally decides.
    let cheap = make_priced_item("W1", "Alpha", 10.0);
    let dear = make_priced_item("W2", "Alpha", 20.0);

    let budget = Some(15.0);
    let a = score_candidate(&cheap, Default::default(), budget);
    let b = score_candidate(&dear, Default::default(), budget);

    // Scores differ (within-budget bonus), so score decides first.
    assert_eq!(a.score, BUDGET_BONUS);
    assert_eq!(b.score, 0.0);
    assert_eq!(compare_candidates(&a, &b), Ordering::Less);

    // Same item both sides: full tie, comparator must say Equal.
    assert_eq!(compare_candidates(&a, &a.clone()), Ordering::Equal);
}

#[test]
fn comparator_is_antisymmetric_on_distinct_items() {
    let a_item = make_priced_item("W1", "Alpha", 10.0);
    let b_item = make_priced_item("W2", "Beta", 10.0);
    let a = score_candidate(&a_item, Default::default(), None);
    let b = score_candidate(&b_item, Default::default(), None);

    assert_eq!(compare_candidates(&a, &b), Ordering::Less);
    assert_eq!(compare_candidates(&b, &a), Ordering::Greater);
}

//! The reference scenarios: full pipeline runs with known expected output.

use crate::common::{filters_of, mixed_catalog, scenario_catalog, wine_pack};
use facetrank::{rank, DomainPack, FailReason, Filters, RankOutcome};

/// Budget 15 over the two-item catalog: both match color=red, but only W1
/// (12) fits the budget. The strict pass keeps it, earns it the bonus, and
/// gates out W2 (20) - no relaxation, since something fit.
#[test]
fn scenario_within_budget_strict_pass() {
    let catalog = scenario_catalog();
    let filters = filters_of(&[("color", &["red"])]);
    let outcome = rank(&catalog, &filters, Some(15.0), Some(&DomainPack::default()), None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    assert!(!r.budget_relaxed);
    assert_eq!(r.total, 1);
    assert_eq!(r.items[0].sku, "W1");

    assert_eq!(r.debug[0].score, 1.5);
    assert_eq!(r.debug[0].matched_count, 1);
    assert_eq!(r.debug[0].budget_delta, 3.0);
}

/// Budget 5, below both prices: strict pass yields nothing, the relaxed
/// pass keeps both at score 1, ordered by budget delta (7 vs 15).
#[test]
fn scenario_budget_relaxation() {
    let catalog = scenario_catalog();
    let filters = filters_of(&[("color", &["red"])]);
    let outcome = rank(&catalog, &filters, Some(5.0), Some(&DomainPack::default()), None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    assert!(r.budget_relaxed);
    let skus: Vec<_> = r.items.iter().map(|i| i.sku.as_str()).collect();
    assert_eq!(skus, ["W1", "W2"]);
    assert_eq!(r.debug[0].score, 1.0);
    assert_eq!(r.debug[0].budget_delta, 7.0);
    assert_eq!(r.debug[1].budget_delta, 15.0);
}

/// Unknown facet key: reported in diagnostics, no item can match it, and
/// with non-empty filters that means a no-match outcome.
#[test]
fn scenario_unknown_facet_key_yields_no_match() {
    let catalog = scenario_catalog();
    let pack = wine_pack();
    let filters = filters_of(&[("vintage", &["2020"])]);
    let outcome = rank(&catalog, &filters, None, Some(&pack), None);

    assert_eq!(outcome.reason(), Some(FailReason::NoMatch));
    assert_eq!(outcome.diagnostics().unknown_facet_keys, ["vintage"]);

    let RankOutcome::NoMatch(n) = outcome else {
        panic!("expected no-match outcome");
    };
    assert_eq!(n.total, 0);
    assert!(!n.budget_relaxed);
    assert_eq!(n.criteria.filters, filters);
}

/// Empty catalog short-circuits, whatever else was asked.
#[test]
fn scenario_empty_catalog() {
    let outcome = rank(
        &[],
        &filters_of(&[("color", &["red"])]),
        Some(15.0),
        Some(&wine_pack()),
        Some(3),
    );

    assert_eq!(outcome.reason(), Some(FailReason::EmptyCatalog));
    let RankOutcome::EmptyCatalog(e) = outcome else {
        panic!("expected empty-catalog outcome");
    };
    assert_eq!(e.total, 0);
    assert!(e.items.is_empty());
    assert_eq!(e.limit_used, 3);
}

/// With a budget, the strict pass is a hard gate: over-budget and
/// priceless candidates disappear rather than rank lower.
#[test]
fn strict_pass_is_a_hard_budget_gate() {
    let catalog = mixed_catalog();
    let pack = wine_pack();
    let filters = filters_of(&[("color", &["red"])]);
    let outcome = rank(&catalog, &filters, Some(15.0), Some(&pack), None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    // Only W1/W5 (price 12) fit the budget; W2 (20) and priceless W4 are
    // gated out, not demoted. Equal on every numeric key and on name,
    // so sku orders W1 before W5.
    assert!(!r.budget_relaxed);
    let skus: Vec<_> = r.items.iter().map(|i| i.sku.as_str()).collect();
    assert_eq!(skus, ["W1", "W5"]);
    assert_eq!(r.total, 2);
}

/// The full key chain on a bigger catalog without a budget: equal scores,
/// infinite deltas, so price then name then sku decide.
#[test]
fn mixed_catalog_full_ordering() {
    let catalog = mixed_catalog();
    let pack = wine_pack();
    let filters = filters_of(&[("color", &["red"])]);
    let outcome = rank(&catalog, &filters, None, Some(&pack), None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    // All red candidates score 1 with delta inf: price ascending puts the
    // two 12s first (name+sku split them), then W2 at 20, then priceless
    // W4 last. W3 is white and never passes the gate.
    let skus: Vec<_> = r.items.iter().map(|i| i.sku.as_str()).collect();
    assert_eq!(skus, ["W1", "W5", "W2", "W4"]);
    assert_eq!(r.total, 4);
}

/// Filters with empty value lists are no constraint at all: everything
/// passes, even with a pack that knows none of the keys.
#[test]
fn empty_value_lists_pass_everything() {
    let catalog = scenario_catalog();
    let filters = filters_of(&[("color", &[])]);
    let outcome = rank(&catalog, &filters, None, None, None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    assert_eq!(r.total, 2);
    // The key itself is still diagnosed against the (missing) vocabulary.
    assert_eq!(r.diagnostics.unknown_facet_keys, ["color"]);
}

/// Missing pack means identity normalization: exact (folded) equality
/// still matches, synonyms do not exist.
#[test]
fn missing_pack_degrades_to_identity() {
    let catalog = scenario_catalog();
    let filters = filters_of(&[("color", &["Ruby"])]);
    let outcome = rank(&catalog, &filters, None, None, None);

    // "ruby" is nobody's synonym without a pack: no match.
    assert_eq!(outcome.reason(), Some(FailReason::NoMatch));

    let filters = filters_of(&[("color", &["RED"])]);
    let outcome = rank(&catalog, &filters, None, None, None);
    assert!(outcome.is_ok());
}

/// Determinism across repeated calls and shuffled input order: the sku
/// tie-break makes output order independent of catalog order.
#[test]
fn shuffled_input_same_output() {
    let mut catalog = mixed_catalog();
    let pack = wine_pack();
    let filters = filters_of(&[("color", &["red"])]);

    let baseline = rank(&catalog, &filters, Some(15.0), Some(&pack), None);
    catalog.reverse();
    let shuffled = rank(&catalog, &filters, Some(15.0), Some(&pack), None);

    let (RankOutcome::Ranked(a), RankOutcome::Ranked(b)) = (baseline, shuffled) else {
        panic!("expected ranked outcomes");
    };
    let skus_a: Vec<_> = a.items.iter().map(|i| i.sku.as_str()).collect();
    let skus_b: Vec<_> = b.items.iter().map(|i| i.sku.as_str()).collect();
    assert_eq!(skus_a, skus_b);
}

/// Wire shape of a failure outcome: `ok` false and the snake_case reason.
#[test]
fn outcome_wire_shape() {
    let outcome = rank(&[], &Filters::new(), None, None, None);
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["reason"], "empty_catalog");
    assert_eq!(json["total"], 0);
}

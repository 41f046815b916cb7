//! Shared test utilities and fixtures.

#![allow(dead_code)]

use facetrank::{CatalogItem, Filters};

// Re-export canonical test utilities from facetrank::testing
pub use facetrank::testing::{make_full_item, make_item, make_pack, make_priced_item, wine_pack};

/// The two-item catalog from the reference scenarios: W1 "Alpha" at 12 with
/// color=red + taste=[light], W2 "Beta" at 20 with color=red.
pub fn scenario_catalog() -> Vec<CatalogItem> {
    let mut alpha = make_full_item("W1", "Alpha", 12.0, &[("color", "red")]);
    alpha
        .facets
        .insert("taste".to_string(), vec!["light"].into());
    let beta = make_full_item("W2", "Beta", 20.0, &[("color", "red")]);
    vec![alpha, beta]
}

/// A larger catalog exercising every ordering key: mixed prices, shared
/// names, priceless items, multi-valued facets.
pub fn mixed_catalog() -> Vec<CatalogItem> {
    let mut items = vec![
        make_full_item("W1", "Alpha", 12.0, &[("color", "red")]),
        make_full_item("W2", "Beta", 20.0, &[("color", "red")]),
        make_full_item("W3", "Gamma", 8.0, &[("color", "white")]),
        make_item("W4", "Delta", &[("color", "red")]),
        make_full_item("W5", "Alpha", 12.0, &[("color", "red")]),
    ];
    items[3]
        .facets
        .insert("taste".to_string(), vec!["light", "dry"].into());
    items
}

/// Build filters from plain slices.
pub fn filters_of(entries: &[(&str, &[&str])]) -> Filters {
    entries
        .iter()
        .map(|(k, vs)| {
            (
                k.to_string(),
                vs.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            )
        })
        .collect()
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CatalogItem, DomainPack, FacetDef, FacetValue};
use std::collections::BTreeMap;

/// Create a priceless item with scalar facets.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(sku: &str, name: &str, facets: &[(&str, &str)]) -> CatalogItem {
    CatalogItem {
        sku: sku.to_string(),
        name: name.to_string(),
        price: None,
        facets: facets
            .iter()
            .map(|(k, v)| (k.to_string(), FacetValue::from(*v)))
            .collect(),
    }
}

/// Create a priced item with no facets.
pub fn make_priced_item(sku: &str, name: &str, price: f64) -> CatalogItem {
    CatalogItem {
        sku: sku.to_string(),
        name: name.to_string(),
        price: Some(price),
        facets: BTreeMap::new(),
    }
}

/// Create an item with a price and scalar facets in one go.
pub fn make_full_item(sku: &str, name: &str, price: f64, facets: &[(&str, &str)]) -> CatalogItem {
    let mut item = make_item(sku, name, facets);
    item.price = Some(price);
    item
}

/// Build a pack from plain slices: global synonyms plus per-facet
/// (values, value synonyms).
pub fn make_pack(
    synonyms: &[(&str, &str)],
    facets: &[(&str, &[&str], &[(&str, &str)])],
) -> DomainPack {
    DomainPack {
        synonyms: synonyms
            .iter()
            .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
            .collect(),
        facets: facets
            .iter()
            .map(|(key, values, value_synonyms)| {
                (
                    key.to_string(),
                    FacetDef {
                        values: values.iter().map(|v| v.to_string()).collect(),
                        value_synonyms: value_synonyms
                            .iter()
                            .map(|(raw, canonical)| (raw.to_string(), canonical.to_string()))
                            .collect(),
                    },
                )
            })
            .collect(),
    }
}

/// The wine pack every test suite leans on: `ruby` aliases to `red`
/// globally, and the `taste` facet folds `crisp` into `light`.
pub fn wine_pack() -> DomainPack {
    make_pack(
        &[("ruby", "red")],
        &[
            ("color", &["red", "white", "rose"], &[]),
            ("taste", &["light", "dry", "bold"], &[("crisp", "light")]),
            ("origin", &["france", "italy", "spain"], &[]),
        ],
    )
}

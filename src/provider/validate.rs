// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Schema validation for loaded catalogs and domain packs.
//!
//! The engine assumes valid, already-parsed inputs (it defensively tolerates
//! almost anything, but "tolerates" is not "endorses"). These checks run at
//! the loading boundary so data problems surface as loader errors with a
//! precise description, instead of as quietly weird rankings.
//!
//! # Checks
//!
//! | Check                      | Why it matters downstream                   |
//! |----------------------------|---------------------------------------------|
//! | `EmptySku` / `DuplicateSku`| sku is the identity in traces and tie-breaks|
//! | `NonFinitePrice`           | NaN prices poison score comparisons         |
//! | `NegativePrice`            | a negative delta bonus would be meaningless |
//! | `EmptyFacetKey`            | unkeyed facets can never be requested       |
//! | `SynonymTargetUnknown`     | a synonym pointing outside `values` makes   |
//! |                            | every use of it a guaranteed diagnostic     |

use crate::types::{Catalog, DomainPack};
use crate::vocab::fold;
use std::collections::HashSet;
use std::fmt;

/// A schema violation in a loaded catalog or domain pack.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// An item has an empty (or whitespace-only) sku.
    EmptySku { index: usize },
    /// Two items share a sku.
    DuplicateSku { sku: String },
    /// An item's price is NaN or infinite.
    NonFinitePrice { sku: String },
    /// An item's price is below zero.
    NegativePrice { sku: String, price: f64 },
    /// An item or pack declares a facet under an empty key.
    EmptyFacetKey { owner: String },
    /// A facet's value synonym maps to a value the facet does not declare.
    SynonymTargetUnknown {
        facet: String,
        raw: String,
        target: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptySku { index } => {
                write!(f, "item at index {} has an empty sku", index)
            }
            SchemaError::DuplicateSku { sku } => {
                write!(f, "duplicate sku '{}'", sku)
            }
            SchemaError::NonFinitePrice { sku } => {
                write!(f, "item '{}' has a non-finite price", sku)
            }
            SchemaError::NegativePrice { sku, price } => {
                write!(f, "item '{}' has negative price {}", sku, price)
            }
            SchemaError::EmptyFacetKey { owner } => {
                write!(f, "'{}' declares a facet under an empty key", owner)
            }
            SchemaError::SynonymTargetUnknown { facet, raw, target } => {
                write!(
                    f,
                    "facet '{}' maps '{}' to '{}', which is not among its declared values",
                    facet, raw, target
                )
            }
        }
    }
}

/// Validate a loaded catalog. Returns the first violation found, scanning
/// items in file order.
pub fn validate_catalog(catalog: &Catalog) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();

    for (index, item) in catalog.items.iter().enumerate() {
        if item.sku.trim().is_empty() {
            return Err(SchemaError::EmptySku { index });
        }
        if !seen.insert(item.sku.as_str()) {
            return Err(SchemaError::DuplicateSku {
                sku: item.sku.clone(),
            });
        }
        if let Some(price) = item.price {
            if !price.is_finite() {
                return Err(SchemaError::NonFinitePrice {
                    sku: item.sku.clone(),
                });
            }
            if price < 0.0 {
                return Err(SchemaError::NegativePrice {
                    sku: item.sku.clone(),
                    price,
                });
            }
        }
        if item.facets.keys().any(|k| k.trim().is_empty()) {
            return Err(SchemaError::EmptyFacetKey {
                owner: item.sku.clone(),
            });
        }
    }

    Ok(())
}

/// Validate a loaded domain pack: no empty facet keys, and every
/// value-synonym target must be among the facet's declared values (compared
/// folded, since that is how the engine will compare them).
pub fn validate_pack(pack: &DomainPack) -> Result<(), SchemaError> {
    for (facet_key, def) in &pack.facets {
        if facet_key.trim().is_empty() {
            return Err(SchemaError::EmptyFacetKey {
                owner: "pack".to_string(),
            });
        }

        let declared: HashSet<String> = def.values.iter().map(|v| fold(v)).collect();
        for (raw, target) in &def.value_synonyms {
            if !declared.contains(&fold(target)) {
                return Err(SchemaError::SynonymTargetUnknown {
                    facet: facet_key.clone(),
                    raw: raw.clone(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(())
}

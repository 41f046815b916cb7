// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a ranking call.
//!
//! These types define how catalog items, domain packs, and ranking outcomes
//! fit together. The engine itself is a pure function over them: nothing in
//! this module is mutated after deserialization, and the only type that is
//! born inside a ranking call (`ScoredCandidate`) dies with it.
//!
//! # Wire shapes
//!
//! | Rust Type       | JSON shape                                           |
//! |-----------------|------------------------------------------------------|
//! | `CatalogItem`   | `{sku, name, price?, facets: {key: "v" \| ["v"]}}`   |
//! | `DomainPack`    | `{synonyms: {...}, facets: {key: {values, valueSynonyms}}}` |
//! | `Diagnostics`   | `{unknownFacetKeys, unknownFacetValues}`             |
//! | `RankOutcome`   | `{ok, reason?, ...}` (untagged, see variants)        |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **ScoredCandidate**: `matched <= total_asked`. One point per satisfied
//!   requested facet; the budget bonus is the only fractional contribution.
//!
//! - **RankOutcome::Ranked**: `items.len() == debug.len() <= limit_used` and
//!   `total >= items.len()`. The debug trace is a parallel view of the same
//!   capped window, not of the full candidate set.
//!
//! - **Filters / Diagnostics maps are `BTreeMap`**: iteration and
//!   serialization order must not depend on hash seeds, or two identical
//!   calls could render diagnostics in different orders.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Facet filters as requested by the caller: facet key to raw requested
/// values. Values may be unnormalized user text ("Crisp", "ROSÉ").
///
/// An empty value list means the facet is not constrained - the matcher and
/// the diagnostics builder both skip it when counting.
pub type Filters = BTreeMap<String, Vec<String>>;

// =============================================================================
// CATALOG
// =============================================================================

/// A facet value on a catalog item: either a single scalar or an ordered
/// list of values (an item can be both "crisp" and "mineral").
///
/// Untagged so catalog JSON can write `"color": "red"` and
/// `"taste": ["light", "dry"]` without a discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FacetValue {
    /// Single value (`"red"`).
    Scalar(String),
    /// Ordered list of values (`["light", "dry"]`).
    Many(Vec<String>),
}

impl FacetValue {
    /// View the value as a slice of raw strings, wrapping a scalar as a
    /// one-element sequence.
    pub fn as_slice(&self) -> &[String] {
        match self {
            FacetValue::Scalar(v) => std::slice::from_ref(v),
            FacetValue::Many(vs) => vs.as_slice(),
        }
    }
}

impl From<&str> for FacetValue {
    fn from(v: &str) -> Self {
        FacetValue::Scalar(v.to_string())
    }
}

impl From<Vec<&str>> for FacetValue {
    fn from(vs: Vec<&str>) -> Self {
        FacetValue::Many(vs.into_iter().map(str::to_string).collect())
    }
}

/// One sellable item in the catalog.
///
/// Immutable once loaded; the engine only ever reads it. `price` is optional
/// because real catalogs have items awaiting pricing - those items are
/// budget-indeterminate (see `ScoredCandidate::price_within_budget`) and
/// sort after priced items under the budget-distance tie-break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique identifier. Uniqueness is enforced by the catalog validator,
    /// not by the engine.
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    /// Facet key to value(s). Keys absent here simply never match.
    #[serde(default)]
    pub facets: BTreeMap<String, FacetValue>,
}

/// A catalog flat file: `{ "items": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

// =============================================================================
// DOMAIN PACK
// =============================================================================

/// Controlled vocabulary for one facet: the canonical values plus the
/// raw-to-canonical synonym table scoped to this facet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetDef {
    /// Allowed canonical values, as declared (pre-folding).
    #[serde(default)]
    pub values: Vec<String>,
    /// Facet-scoped raw value to canonical value mapping.
    #[serde(default)]
    pub value_synonyms: HashMap<String, String>,
}

/// External vocabulary definition for one business domain (e.g. wine).
///
/// Plain configuration data, read-only to the engine. Every field defaults
/// so a partial or empty pack parses - a missing pack degrades to identity
/// normalization and empty vocabularies, never to an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomainPack {
    /// Global raw-term to canonical-term mapping, applied before any
    /// facet-scoped lookup.
    #[serde(default)]
    pub synonyms: HashMap<String, String>,
    /// Per-facet vocabulary, keyed by facet key.
    #[serde(default)]
    pub facets: HashMap<String, FacetDef>,
}

// =============================================================================
// TRANSIENTS
// =============================================================================

/// Per-item scoring state for one ranking call. Never persisted, never
/// serialized; lives exactly as long as the call that allocated it.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub item: &'a CatalogItem,
    /// `matched` facet points plus the budget bonus, if earned.
    pub score: f64,
    /// How many requested facets this item satisfied.
    pub matched: usize,
    /// How many facets were requested (with non-empty value lists).
    pub total_asked: usize,
    /// `Some(true)` = priced within budget, `Some(false)` = priced over
    /// budget, `None` = indeterminate (no budget given and/or no price on
    /// the item). Only `Some(true)` survives the strict pass.
    pub price_within_budget: Option<bool>,
    /// `|price - budget|` when both exist, `+inf` otherwise, so priceless
    /// or budgetless candidates always sort after priced ones.
    pub budget_delta: f64,
}

// =============================================================================
// DIAGNOSTICS & RESULT SHAPES
// =============================================================================

/// What was wrong with the request, relative to the pack's declared
/// vocabulary. Computed from filters and pack alone - identical whether the
/// catalog is empty, fully matching, or fully non-matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    /// Requested facet keys the pack does not declare, in filter order.
    pub unknown_facet_keys: Vec<String>,
    /// Requested raw values (original spelling, not normalized) that are not
    /// in the facet's vocabulary, per known facet key, in request order.
    pub unknown_facet_values: BTreeMap<String, Vec<String>>,
}

impl Diagnostics {
    /// True when the request was fully covered by the pack vocabulary.
    pub fn is_clean(&self) -> bool {
        self.unknown_facet_keys.is_empty() && self.unknown_facet_values.is_empty()
    }
}

/// Echo of the criteria a ranking call was asked to satisfy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub filters: Filters,
    #[serde(default)]
    pub budget: Option<f64>,
}

/// Why a ranking call produced no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailReason {
    EmptyCatalog,
    NoMatch,
}

/// Per-item trace record explaining why an item ranked where it did.
/// Parallel to `Ranked::items` by index, over the same capped window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    pub sku: String,
    pub score: f64,
    pub matched_count: usize,
    pub total_asked: usize,
    /// `+inf` serializes as `null` via serde_json; consumers treat a null
    /// delta the same as an absent one.
    pub budget_delta: f64,
}

/// Ranking over an empty catalog. No scoring was attempted; diagnostics are
/// computed from the filters alone.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmptyCatalogOutcome {
    pub ok: bool,
    pub reason: FailReason,
    pub diagnostics: Diagnostics,
    pub total: usize,
    pub items: Vec<CatalogItem>,
    pub limit_used: usize,
}

/// Scoring and filtering (strict, then relaxed if a budget allowed it)
/// yielded zero candidates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoMatchOutcome {
    pub ok: bool,
    pub reason: FailReason,
    pub criteria: Criteria,
    pub diagnostics: Diagnostics,
    pub total: usize,
    pub items: Vec<CatalogItem>,
    pub budget_relaxed: bool,
    pub limit_used: usize,
}

/// The ranked, capped result window plus everything needed to explain it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOutcome {
    pub ok: bool,
    pub criteria: Criteria,
    pub diagnostics: Diagnostics,
    /// Candidates that passed the keep-gate, before capping.
    pub total: usize,
    pub items: Vec<CatalogItem>,
    /// Parallel to `items`: one trace entry per returned item.
    pub debug: Vec<TraceEntry>,
    pub budget_relaxed: bool,
    pub limit_used: usize,
}

/// Result of one ranking call, tagged by the `ok` field and (on failure
/// paths) a snake_case `reason`. Untagged serde: each variant already
/// carries its own discriminating fields on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RankOutcome {
    EmptyCatalog(EmptyCatalogOutcome),
    NoMatch(NoMatchOutcome),
    Ranked(RankedOutcome),
}

impl RankOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, RankOutcome::Ranked(_))
    }

    pub fn reason(&self) -> Option<FailReason> {
        match self {
            RankOutcome::EmptyCatalog(_) => Some(FailReason::EmptyCatalog),
            RankOutcome::NoMatch(_) => Some(FailReason::NoMatch),
            RankOutcome::Ranked(_) => None,
        }
    }

    /// Effective result cap after clamping, whichever variant.
    pub fn limit_used(&self) -> usize {
        match self {
            RankOutcome::EmptyCatalog(o) => o.limit_used,
            RankOutcome::NoMatch(o) => o.limit_used,
            RankOutcome::Ranked(o) => o.limit_used,
        }
    }

    /// Whether the budget constraint had to be dropped to produce anything.
    /// Always false for an empty catalog (no scoring was attempted).
    pub fn budget_relaxed(&self) -> bool {
        match self {
            RankOutcome::EmptyCatalog(_) => false,
            RankOutcome::NoMatch(o) => o.budget_relaxed,
            RankOutcome::Ranked(o) => o.budget_relaxed,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            RankOutcome::EmptyCatalog(o) => &o.diagnostics,
            RankOutcome::NoMatch(o) => &o.diagnostics,
            RankOutcome::Ranked(o) => &o.diagnostics,
        }
    }
}

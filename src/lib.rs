//! Facet-filtered, budget-aware catalog ranking.
//!
//! This crate matches a catalog of items against user-requested facet
//! filters and an optional price budget, returning a deterministically
//! ordered result set with diagnostics about unmatched criteria and policy
//! fallbacks. The whole computation is pure: no I/O, no shared state, no
//! randomness - same inputs, same order, every time.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  vocab.rs   │────▶│ matching.rs  │────▶│  scoring/    │
//! │ (synonyms,  │     │(match_facets)│     │ (score, cmp) │
//! │  folding)   │     └──────────────┘     └──────────────┘
//! └─────────────┘            │                    │
//!        │                   ▼                    ▼
//!        │          ┌─────────────────────────────────────┐
//!        └─────────▶│              rank/                  │
//!                   │  (two-phase pipeline: strict pass,  │
//!                   │   relaxed pass, sort, cap, shape)   │
//!                   └─────────────────────────────────────┘
//!                                   ▲
//!                  diagnostics.rs ──┘  (request vs vocabulary,
//!                                       catalog-independent)
//! ```
//!
//! The `provider` module loads catalogs and domain packs from JSON flat
//! files and validates their schema; the engine itself only ever sees
//! fully-materialized inputs.
//!
//! # Usage
//!
//! ```ignore
//! use facetrank::{rank, Filters, RankOutcome};
//!
//! let catalog = facetrank::load_catalog(Path::new("catalog.json"))?;
//! let pack = facetrank::load_pack(Path::new("wine-pack.json"))?;
//!
//! let mut filters = Filters::new();
//! filters.insert("color".into(), vec!["Ruby".into()]);
//!
//! match rank(&catalog.items, &filters, Some(15.0), Some(&pack), Some(5)) {
//!     RankOutcome::Ranked(r) => println!("{} candidates", r.total),
//!     other => eprintln!("no results: {:?}", other.reason()),
//! }
//! ```

// Module declarations
mod diagnostics;
mod matching;
mod rank;
mod scoring;
mod types;
mod vocab;

pub mod provider;
pub mod testing;

// Re-exports for public API
pub use diagnostics::compute_diagnostics;
pub use matching::{match_facets, FacetMatch};
pub use provider::validate::{validate_catalog, validate_pack, SchemaError};
pub use provider::{load_catalog, load_pack};
pub use rank::{clamp_limit, diagnose, rank, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT};
pub use scoring::ranking::compare_candidates;
pub use scoring::{budget_delta, score_candidate, BUDGET_BONUS};
pub use types::{
    Catalog, CatalogItem, Criteria, Diagnostics, DomainPack, EmptyCatalogOutcome, FacetDef,
    FacetValue, FailReason, Filters, NoMatchOutcome, RankOutcome, RankedOutcome, ScoredCandidate,
    TraceEntry,
};
pub use vocab::{apply_facet_value_synonyms, canonical_facet_value, fold, normalize_value};

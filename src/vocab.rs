// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Vocabulary resolution: raw user text to canonical facet values.
//!
//! Two lookup tables, applied in a fixed order: the pack's global synonym
//! table first, then the facet-scoped value-synonym table. Both are plain
//! data from the domain pack - no dispatch, no traits, just composed maps.
//! The order matters: a global alias ("ruby" → "red") can be further refined
//! per facet ("red" → "red-blend" under `grape`), never the other way around.
//!
//! Every function here is total and side-effect free. An unknown term passes
//! through folded-but-unmapped, which is exactly what the matcher and the
//! diagnostics builder want: they compare canonical forms, and a term the
//! pack has never heard of can only ever equal itself.

use crate::types::DomainPack;

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Fold a raw string for comparison: trim, strip diacritics, lowercase, and
/// collapse internal whitespace.
///
/// This enables matching between ASCII and accented spellings:
/// - "Rosé" → "rose"
/// - " Sémillon " → "semillon"
/// - "LIGHT  bodied" → "light bodied"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks (category Mn = Mark, Nonspacing)
/// 3. Lowercase
/// 4. Collapse whitespace (also trims)
///
/// # Algorithm (without unicode-normalization)
///
/// 1. Lowercase only (assumes input is pre-normalized or ASCII)
/// 2. Collapse whitespace
#[cfg(feature = "unicode-normalization")]
pub fn fold(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lightweight folding without the unicode-normalization dependency.
/// Just lowercases and collapses whitespace.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check if a character is a combining mark (diacritic).
///
/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
/// Examples: ́ (acute), ̄ (macron), ̣ (dot below)
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    // Unicode category Mn (Mark, Nonspacing) range
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Resolve a raw term through the pack's global synonym table.
///
/// Folds the input, then looks it up in `pack.synonyms`; absent terms come
/// back folded but otherwise unchanged. Total: never fails, never mutates
/// the pack.
///
/// # Example
///
/// ```ignore
/// // pack.synonyms: { "ruby" → "red" }
/// assert_eq!(normalize_value("  Ruby ", &pack), "red");
/// assert_eq!(normalize_value("magenta", &pack), "magenta");
/// ```
pub fn normalize_value(raw: &str, pack: &DomainPack) -> String {
    let folded = fold(raw);
    match pack.synonyms.get(&folded) {
        Some(canonical) => canonical.clone(),
        None => folded,
    }
}

/// Refine an already-normalized value through a facet's own synonym table.
///
/// Falls back to the input when the facet is undeclared or has no mapping
/// for this value. Called *after* `normalize_value` - the facet table is
/// keyed by post-global-synonym forms.
pub fn apply_facet_value_synonyms(value: &str, facet_key: &str, pack: &DomainPack) -> String {
    pack.facets
        .get(facet_key)
        .and_then(|def| def.value_synonyms.get(value))
        .cloned()
        .unwrap_or_else(|| value.to_string())
}

/// Full canonicalization for one facet value: global synonyms, then the
/// facet-scoped table, in that order.
pub fn canonical_facet_value(raw: &str, facet_key: &str, pack: &DomainPack) -> String {
    let normalized = normalize_value(raw, pack);
    apply_facet_value_synonyms(&normalized, facet_key, pack)
}

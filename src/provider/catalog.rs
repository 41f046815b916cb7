// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog flat-file loading.

use crate::types::Catalog;
use std::fs;
use std::path::Path;

/// Load a catalog from a JSON file of shape `{ "items": [...] }`.
///
/// Items keep their file order - the engine re-sorts on every call, so the
/// order only matters for humans diffing the file.
pub fn load_catalog(path: &Path) -> Result<Catalog, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read catalog {}: {}", path.display(), e))?;
    let catalog: Catalog = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid catalog JSON in {}: {}", path.display(), e))?;
    Ok(catalog)
}

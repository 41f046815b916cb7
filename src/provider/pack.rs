// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Domain-pack flat-file loading.

use crate::types::DomainPack;
use std::fs;
use std::path::Path;

/// Load a domain pack from a JSON file.
///
/// Every field defaults, so a partial pack (`{}`, synonyms only, one facet)
/// parses cleanly. A caller with no pack file at all should pass
/// `None` to `rank` instead - the engine degrades to identity
/// normalization either way.
pub fn load_pack(path: &Path) -> Result<DomainPack, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read domain pack {}: {}", path.display(), e))?;
    let pack: DomainPack = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid domain pack JSON in {}: {}", path.display(), e))?;
    Ok(pack)
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the facetrank command-line interface.
//!
//! Three subcommands: `rank` to rank a catalog against filters and a
//! budget, `diagnose` to check filters against a domain pack's vocabulary
//! without touching a catalog, and `inspect` to summarize what a catalog
//! and pack contain.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "facetrank",
    about = "Deterministic facet-filtered, budget-aware catalog ranking",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank a catalog against facet filters and an optional budget
    Rank {
        /// Path to the catalog JSON file ({"items": [...]})
        #[arg(short, long)]
        catalog: String,

        /// Path to the domain pack JSON file (synonyms + facet vocabulary)
        #[arg(short, long)]
        pack: Option<String>,

        /// Facet filter as key=value, or key=v1|v2 for alternatives.
        /// Repeat the flag for multiple facets.
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Price budget in the catalog's currency unit
        #[arg(short, long)]
        budget: Option<f64>,

        /// Maximum number of results to return (clamped to 1-50)
        #[arg(short, long, default_value = "10")]
        limit: i64,

        /// Emit the raw outcome as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Check filters against a domain pack's vocabulary
    Diagnose {
        /// Path to the domain pack JSON file
        #[arg(short, long)]
        pack: String,

        /// Facet filter as key=value, or key=v1|v2 for alternatives
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// Emit diagnostics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a catalog and domain pack
    Inspect {
        /// Path to the catalog JSON file
        #[arg(short, long)]
        catalog: String,

        /// Path to the domain pack JSON file
        #[arg(short, long)]
        pack: Option<String>,
    },
}

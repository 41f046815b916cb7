// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::collections::BTreeSet;
use std::path::Path;

use facetrank::{
    diagnose, load_catalog, load_pack, rank, validate_catalog, validate_pack, Catalog, DomainPack,
    Filters,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Rank {
            catalog,
            pack,
            filters,
            budget,
            limit,
            json,
        } => run_rank(&catalog, pack.as_deref(), &filters, budget, limit, json),
        Commands::Diagnose { pack, filters, json } => run_diagnose(&pack, &filters, json),
        Commands::Inspect { catalog, pack } => run_inspect(&catalog, pack.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Parse repeated `--filter key=v1|v2` arguments into the filters map.
/// Repeating a key merges its values in argument order.
fn parse_filters(args: &[String]) -> Result<Filters, String> {
    let mut filters = Filters::new();
    for arg in args {
        let (key, values) = arg
            .split_once('=')
            .ok_or_else(|| format!("invalid filter '{}': expected key=value", arg))?;
        if key.trim().is_empty() {
            return Err(format!("invalid filter '{}': empty facet key", arg));
        }
        let entry = filters.entry(key.trim().to_string()).or_default();
        entry.extend(
            values
                .split('|')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        );
    }
    Ok(filters)
}

fn load_validated_catalog(path: &str) -> Result<Catalog, String> {
    let catalog = load_catalog(Path::new(path))?;
    validate_catalog(&catalog).map_err(|e| format!("invalid catalog {}: {}", path, e))?;
    Ok(catalog)
}

fn load_validated_pack(path: &str) -> Result<DomainPack, String> {
    let pack = load_pack(Path::new(path))?;
    validate_pack(&pack).map_err(|e| format!("invalid domain pack {}: {}", path, e))?;
    Ok(pack)
}

fn run_rank(
    catalog_path: &str,
    pack_path: Option<&str>,
    filter_args: &[String],
    budget: Option<f64>,
    limit: i64,
    json: bool,
) -> Result<(), String> {
    let catalog = load_validated_catalog(catalog_path)?;
    let pack = pack_path.map(load_validated_pack).transpose()?;
    let filters = parse_filters(filter_args)?;

    let outcome = rank(
        &catalog.items,
        &filters,
        budget,
        pack.as_ref(),
        Some(limit),
    );

    if json {
        let rendered = serde_json::to_string_pretty(&outcome)
            .map_err(|e| format!("failed to serialize outcome: {}", e))?;
        println!("{}", rendered);
    } else {
        display::render_outcome(&outcome);
    }
    Ok(())
}

fn run_diagnose(pack_path: &str, filter_args: &[String], json: bool) -> Result<(), String> {
    let pack = load_validated_pack(pack_path)?;
    let filters = parse_filters(filter_args)?;
    let diagnostics = diagnose(&filters, Some(&pack));

    if json {
        let rendered = serde_json::to_string_pretty(&diagnostics)
            .map_err(|e| format!("failed to serialize diagnostics: {}", e))?;
        println!("{}", rendered);
    } else if diagnostics.is_clean() {
        println!("filters are fully covered by the pack vocabulary");
    } else {
        display::render_diagnostics(&diagnostics);
    }
    Ok(())
}

fn run_inspect(catalog_path: &str, pack_path: Option<&str>) -> Result<(), String> {
    let catalog = load_validated_catalog(catalog_path)?;

    display::section_top("CATALOG");
    display::summary_line("items", &catalog.items.len().to_string());
    let priced = catalog.items.iter().filter(|i| i.price.is_some()).count();
    display::summary_line("priced", &format!("{}/{}", priced, catalog.items.len()));

    let facet_keys: BTreeSet<&str> = catalog
        .items
        .iter()
        .flat_map(|i| i.facets.keys())
        .map(String::as_str)
        .collect();
    display::summary_line(
        "facet keys",
        &facet_keys.iter().copied().collect::<Vec<_>>().join(", "),
    );
    display::section_bottom();

    if let Some(path) = pack_path {
        let pack = load_validated_pack(path)?;
        display::section_top("DOMAIN PACK");
        display::summary_line("synonyms", &pack.synonyms.len().to_string());
        let mut keys: Vec<_> = pack.facets.keys().cloned().collect();
        keys.sort();
        for key in keys {
            let def = &pack.facets[&key];
            display::summary_line(
                &format!("facet '{}'", key),
                &format!(
                    "{} values, {} synonyms",
                    def.values.len(),
                    def.value_synonyms.len()
                ),
            );
        }
        display::section_bottom();
    }

    Ok(())
}

//! Provider round-trips: JSON flat files through loading, validation, and
//! a full ranking call.

use crate::common::filters_of;
use facetrank::{
    load_catalog, load_pack, rank, validate_catalog, validate_pack, RankOutcome,
};
use std::fs;
use std::path::PathBuf;

fn write_fixture(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const CATALOG_JSON: &str = r#"{
  "items": [
    {"sku": "W1", "name": "Alpha", "price": 12, "facets": {"color": "red", "taste": ["light"]}},
    {"sku": "W2", "name": "Beta", "price": 20, "facets": {"color": "red"}},
    {"sku": "W3", "name": "Gamma", "facets": {"color": "white"}}
  ]
}"#;

const PACK_JSON: &str = r#"{
  "synonyms": {"ruby": "red"},
  "facets": {
    "color": {"values": ["red", "white", "rose"]},
    "taste": {"values": ["light", "dry"], "valueSynonyms": {"crisp": "light"}}
  }
}"#;

#[test]
fn file_to_ranking_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = write_fixture(&dir, "catalog.json", CATALOG_JSON);
    let pack_path = write_fixture(&dir, "pack.json", PACK_JSON);

    let catalog = load_catalog(&catalog_path).unwrap();
    let pack = load_pack(&pack_path).unwrap();
    validate_catalog(&catalog).unwrap();
    validate_pack(&pack).unwrap();

    // "Ruby" resolves through the pack; "crisp" folds into "light".
    let filters = filters_of(&[("color", &["Ruby"]), ("taste", &["crisp"])]);
    let outcome = rank(&catalog.items, &filters, Some(15.0), Some(&pack), None);

    let RankOutcome::Ranked(r) = outcome else {
        panic!("expected ranked outcome");
    };
    // W1 matches both facets and fits the budget: 2.5. W2 matches color
    // only but is over budget and is gated out by the strict pass.
    assert_eq!(r.items[0].sku, "W1");
    assert_eq!(r.debug[0].score, 2.5);
    assert_eq!(r.total, 1);
    assert!(r.diagnostics.is_clean());
}

#[test]
fn validation_rejects_duplicate_skus_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "catalog.json",
        r#"{"items": [
            {"sku": "W1", "name": "Alpha"},
            {"sku": "W1", "name": "Beta"}
        ]}"#,
    );

    let catalog = load_catalog(&path).unwrap();
    let err = validate_catalog(&catalog).unwrap_err();
    assert!(err.to_string().contains("duplicate sku"));
}

#[test]
fn pack_with_unknown_synonym_target_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "pack.json",
        r#"{"facets": {"taste": {"values": ["light"], "valueSynonyms": {"smooth": "velvety"}}}}"#,
    );

    let pack = load_pack(&path).unwrap();
    let err = validate_pack(&pack).unwrap_err();
    assert!(err.to_string().contains("velvety"));
}

#[test]
fn ranked_outcome_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = write_fixture(&dir, "catalog.json", CATALOG_JSON);
    let catalog = load_catalog(&catalog_path).unwrap();

    let filters = filters_of(&[("color", &["red"])]);
    let outcome = rank(&catalog.items, &filters, Some(15.0), None, Some(2));

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["limitUsed"], 2);
    assert_eq!(json["budgetRelaxed"], false);
    assert_eq!(json["criteria"]["budget"], 15.0);
    assert_eq!(json["items"][0]["sku"], "W1");
    assert_eq!(json["debug"][0]["matchedCount"], 1);
}

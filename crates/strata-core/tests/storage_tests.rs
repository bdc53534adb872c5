// Rust guideline compliant 2026-10-19

//! Unit tests for the storage module.
//!
//! These tests validate the on-disk layout of the module list and catalog
//! documents, plus error conditions.

use std::fs;
use strata_core::storage::{self, JsonDocument};
use strata_core::{Error, ModuleCatalog, ModuleList, ModuleRecord};
use tempfile::TempDir;

fn sample_catalog() -> ModuleCatalog {
    ModuleCatalog::new(vec![
        ModuleRecord::new("module-a", "1.0.0").with_dependents(["module-b"]),
        ModuleRecord {
            level: 2,
            ..ModuleRecord::new("module-b", "2.1.0")
        },
    ])
}

#[test]
fn test_empty_path_rejected() {
    assert!(JsonDocument::new("").is_err());
}

#[test]
fn test_missing_file_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let doc = JsonDocument::new(temp_dir.path().join("absent.json")).expect("Valid path");

    assert!(!doc.exists());
    let err = doc.load::<ModuleList>().expect_err("Missing file must fail");
    match err {
        Error::Io(e) => assert!(e.to_string().contains("absent.json"), "Path in message"),
        other => panic!("Unexpected error: {}", other),
    }
}

#[test]
fn test_malformed_json_is_json_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("module_list.json");
    fs::write(&path, "{\"modules\": [\"module-a\",").expect("Failed to write test file");

    let err = storage::load_module_list(&path).expect_err("Malformed JSON must fail");
    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_catalog_written_with_four_space_indent() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("stdlib_modules.json");

    storage::save_catalog(&path, &sample_catalog()).expect("Failed to save");
    let content = fs::read_to_string(&path).expect("Failed to read back");

    assert!(content.starts_with("{\n    \"modules\": [\n        {\n"));
    assert!(content.contains("            \"name\": \"module-a\""));
    assert!(content.ends_with("}\n"), "Document ends with a newline");
}

#[test]
fn test_catalog_field_names() {
    let json = storage::to_pretty_json(&sample_catalog()).expect("Serializable");
    let value: serde_json::Value = serde_json::from_slice(&json).expect("Parseable");
    let first = &value["modules"][0];

    assert_eq!(first["name"], "module-a");
    assert_eq!(first["version"], "1.0.0");
    assert_eq!(first["level"], 1);
    assert_eq!(first["release"], true);
    assert_eq!(first["dependents"][0], "module-b");
}

#[test]
fn test_catalog_reload_preserves_records() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("stdlib_modules.json");
    let catalog = sample_catalog();

    storage::save_catalog(&path, &catalog).expect("Failed to save");
    let loaded = storage::load_catalog(&path).expect("Failed to load");

    assert_eq!(loaded, catalog);
}

#[test]
fn test_catalog_defaults_for_missing_fields() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("stdlib_modules.json");
    fs::write(&path, r#"{"modules": [{"name": "module-a", "dependents": []}]}"#)
        .expect("Failed to write test file");

    let loaded = storage::load_catalog(&path).expect("Failed to load");
    let record = &loaded.modules[0];

    assert_eq!(record.version, "");
    assert_eq!(record.level, 1);
    assert!(record.release);
}

#[test]
fn test_save_replaces_existing_document() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("module_list.json");
    fs::write(&path, "stale").expect("Failed to write test file");

    let list = ModuleList {
        modules: vec!["module-b".to_string(), "module-a".to_string()],
    };
    storage::save_module_list(&path, &list).expect("Failed to save");

    assert_eq!(storage::load_module_list(&path).expect("Failed to load"), list);
    assert!(
        !temp_dir.path().join("module_list.json.tmp").exists(),
        "Temp file is renamed away"
    );
}

#[test]
fn test_failed_save_removes_temp_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    // a non-empty directory at the target path makes the final rename fail
    let path = temp_dir.path().join("stdlib_modules.json");
    fs::create_dir(&path).expect("Failed to create blocking dir");
    fs::write(path.join("keep"), "x").expect("Failed to fill blocking dir");

    let err = storage::save_catalog(&path, &sample_catalog()).expect_err("Rename must fail");

    assert!(matches!(err, Error::Io(_)));
    assert!(
        !temp_dir.path().join("stdlib_modules.json.tmp").exists(),
        "Temp file is cleaned up on failure"
    );
    assert!(path.join("keep").exists(), "Target left untouched");
}

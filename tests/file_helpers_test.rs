//! Integration tests for the file I/O helpers
//!
//! Exercises the YAML/JSON readers, the JSON writer, directory creation,
//! binary persistence, and the file-size helper against a real temp
//! filesystem.

use mlscaffold::{
    create_directories, get_size, load_bin, load_json, read_yaml, save_bin, save_json, UtilError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_read_yaml_returns_parsed_values() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("params.yaml");
    fs::write(
        &path,
        "model: elasticnet\nalpha: 0.2\nl1_ratio: 0.4\ntarget_column: quality\n",
    )
    .unwrap();

    let params = read_yaml(&path).unwrap();

    assert_eq!(params["model"].as_str(), Some("elasticnet"));
    assert_eq!(params["alpha"].as_f64(), Some(0.2));
    assert_eq!(params.require("target_column").unwrap().as_str(), Some("quality"));
}

#[test]
fn test_read_yaml_typed_access_matches_key_access() {
    #[derive(Debug, Deserialize)]
    struct Params {
        model: String,
        alpha: f64,
    }

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("params.yaml");
    fs::write(&path, "model: elasticnet\nalpha: 0.2\n").unwrap();

    let map = read_yaml(&path).unwrap();
    let typed: Params = map.deserialize_into().unwrap();

    assert_eq!(Some(typed.model.as_str()), map["model"].as_str());
    assert_eq!(Some(typed.alpha), map["alpha"].as_f64());
}

#[test]
fn test_read_yaml_empty_file_is_empty_document() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty.yaml");
    fs::write(&path, "").unwrap();

    let err = read_yaml(&path).unwrap_err();
    assert!(matches!(err, UtilError::EmptyDocument { .. }));
}

#[test]
fn test_read_yaml_empty_mapping_is_empty_document() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("empty_map.yaml");
    fs::write(&path, "{}\n").unwrap();

    let err = read_yaml(&path).unwrap_err();
    assert!(matches!(err, UtilError::EmptyDocument { .. }));
}

#[test]
fn test_read_yaml_missing_file_propagates_io_error() {
    let tmp = TempDir::new().unwrap();
    let err = read_yaml(tmp.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, UtilError::Io(_)));
}

#[test]
fn test_read_yaml_malformed_propagates_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.yaml");
    fs::write(&path, "model: [unclosed\n").unwrap();

    let err = read_yaml(&path).unwrap_err();
    assert!(matches!(err, UtilError::Yaml(_)));
}

#[test]
fn test_json_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("metrics.json");

    let metrics = json!({
        "rmse": 0.78,
        "mae": 0.62,
        "r2": 0.25,
        "run": "2024-05-01",
    });

    save_json(&path, &metrics).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(loaded["rmse"].as_f64(), Some(0.78));
    assert_eq!(loaded["mae"].as_f64(), Some(0.62));
    assert_eq!(loaded["r2"].as_f64(), Some(0.25));
    assert_eq!(loaded["run"].as_str(), Some("2024-05-01"));
    assert_eq!(loaded.len(), 4);
}

#[test]
fn test_save_json_uses_four_space_indent() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("metrics.json");

    save_json(&path, &json!({ "rmse": 0.78 })).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.contains("\n    \"rmse\""));
}

#[test]
fn test_save_json_overwrites_existing_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("metrics.json");

    save_json(&path, &json!({ "rmse": 0.9, "stale": true })).unwrap();
    save_json(&path, &json!({ "rmse": 0.78 })).unwrap();

    let loaded = load_json(&path).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded["rmse"].as_f64(), Some(0.78));
}

#[test]
fn test_load_json_malformed_propagates_parse_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "{\"rmse\": ").unwrap();

    let err = load_json(&path).unwrap_err();
    assert!(matches!(err, UtilError::Json(_)));
}

#[test]
fn test_create_directories_then_recreate_is_noop() {
    let tmp = TempDir::new().unwrap();
    let dirs = [
        tmp.path().join("artifacts/data_ingestion"),
        tmp.path().join("artifacts/model_trainer"),
    ];

    create_directories(&dirs, true).unwrap();
    assert!(dirs.iter().all(|d| d.is_dir()));

    // Second call must succeed with the filesystem unchanged
    create_directories(&dirs, true).unwrap();
    assert!(dirs.iter().all(|d| d.is_dir()));
}

#[test]
fn test_bin_round_trip_preserves_value() {
    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct SplitIndex {
        train: Vec<u32>,
        test: Vec<u32>,
        seed: u64,
    }

    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("split.bin");

    let split = SplitIndex {
        train: (0..800).collect(),
        test: (800..1000).collect(),
        seed: 42,
    };

    save_bin(&split, &path).unwrap();
    let loaded: SplitIndex = load_bin(&path).unwrap();
    assert_eq!(loaded, split);
}

#[test]
fn test_get_size_reports_rounded_kilobytes() {
    let tmp = TempDir::new().unwrap();

    let exact = tmp.path().join("exact.bin");
    fs::write(&exact, vec![0u8; 2048]).unwrap();
    assert_eq!(get_size(&exact).unwrap(), "~ 2 KB");

    let rounded_down = tmp.path().join("small.bin");
    fs::write(&rounded_down, vec![0u8; 1500]).unwrap();
    assert_eq!(get_size(&rounded_down).unwrap(), "~ 1 KB");
}

//! Tests for answer validators

mod common;

use std::fs;

use common::{display, layers_model_dir, saved_model_dir};
use tempfile::TempDir;
use tfjs_wizard::model::Format;
use tfjs_wizard::questions::{validate_input_path, validate_output_path, validate_shard_size};

#[test]
fn test_output_path_rejects_exactly_existing_paths() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("model.json");
    fs::write(&file, "{}").unwrap();
    let dir = temp.path().join("existing");
    fs::create_dir(&dir).unwrap();

    for existing in [&file, &dir] {
        let err = validate_output_path(&display(existing)).unwrap_err();
        assert_eq!(err, format!("The output path already exists: {}", display(existing)));
    }
    assert!(validate_output_path(&display(&temp.path().join("fresh"))).is_ok());
    assert!(validate_output_path(&display(&temp.path().join("a/b/c"))).is_ok());
}

#[test]
fn test_output_path_requires_value() {
    assert_eq!(
        validate_output_path("").unwrap_err(),
        "Please provide a valid output path"
    );
}

#[test]
fn test_input_path_nonexistent() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    for format in [Format::KerasHdf5, Format::TfSavedModel, Format::TfjsLayersModel] {
        let err = validate_input_path(&display(&missing), format).unwrap_err();
        assert!(err.starts_with("Nonexistent path for the model"), "{}", err);
    }
}

#[test]
fn test_input_path_accepts_matching_models() {
    let temp = TempDir::new().unwrap();
    let saved = saved_model_dir(&temp);
    let (layers, json) = layers_model_dir(&temp);

    assert!(validate_input_path(&display(&saved), Format::TfSavedModel).is_ok());
    assert!(validate_input_path(&display(&saved.join("saved_model.pb")), Format::KerasSavedModel).is_ok());
    assert!(validate_input_path(&display(&layers), Format::TfjsLayersModel).is_ok());
    assert!(validate_input_path(&display(&json), Format::TfjsLayersModel).is_ok());
    assert!(validate_input_path(&display(&json), Format::KerasHdf5).is_ok());
}

#[test]
fn test_keras_input_must_be_file() {
    let temp = TempDir::new().unwrap();
    let err = validate_input_path(&display(temp.path()), Format::KerasHdf5).unwrap_err();
    assert_eq!(err, format!("The path provided is not a file: {}", display(temp.path())));
}

#[test]
fn test_shard_size() {
    assert!(validate_shard_size("4194304").is_ok());
    assert!(validate_shard_size(" 1 ").is_ok());
    assert!(validate_shard_size("0").is_err());
    assert!(validate_shard_size("-5").is_err());
    assert!(validate_shard_size("4MB").is_err());
}

//! Unit tests for config module
//!
//! Tests defaults, TOML parsing and validation.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::{fs, path::PathBuf};

use tempfile::TempDir;

use crate::{
    DocsToolError,
    config::{DocsConfig, LogLevel},
};

#[test]
fn config_default() {
    let config = DocsConfig::default();

    assert_eq!(config.output.docs_dir, PathBuf::from("docs/markdown"));
    assert_eq!(config.output.schemas_dir, PathBuf::from("docs/schema"));
    assert!(!config.output.cleanup_schemas);
    assert_eq!(config.render.max_depth, 8);
    assert_eq!(config.logging.level, LogLevel::Info);
    assert!(config.logging.log_dir.is_none());
}

#[test]
fn config_empty_toml() {
    let config = DocsConfig::from_toml_str("").unwrap();

    assert_eq!(config, DocsConfig::default());
}

#[test]
fn config_partial_toml_keeps_other_defaults() {
    let toml_str = r#"
        [output]
        cleanup_schemas = true

        [logging]
        level = "debug"
    "#;

    let config = DocsConfig::from_toml_str(toml_str).unwrap();

    assert!(config.output.cleanup_schemas);
    assert_eq!(config.output.docs_dir, PathBuf::from("docs/markdown"));
    assert_eq!(config.logging.level, LogLevel::Debug);
    assert_eq!(config.render.max_depth, 8);
}

#[test]
fn config_serialize_roundtrip() {
    let original = DocsConfig::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized = DocsConfig::from_toml_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_rejects_zero_depth() {
    let err = DocsConfig::from_toml_str("[render]\nmax_depth = 0").unwrap_err();

    match err {
        DocsToolError::InvalidConfigField { field, .. } => assert_eq!(field, "render.max_depth"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_invalid_toml_reports_location() {
    let err = DocsConfig::from_toml_str("[output\ndocs_dir = 1").unwrap_err();

    match err {
        DocsToolError::TomlParseError { location, .. } => assert_eq!(location, "string"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_load_from_explicit_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("docs.toml");
    fs::write(&path, "[output]\ndocs_dir = \"out/md\"\n").unwrap();

    let config = DocsConfig::load(Some(&path)).unwrap();

    assert_eq!(config.output.docs_dir, PathBuf::from("out/md"));
}

#[test]
fn config_load_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.toml");

    let err = DocsConfig::load(Some(&path)).unwrap_err();

    assert!(matches!(err, DocsToolError::IoError { .. }));
}

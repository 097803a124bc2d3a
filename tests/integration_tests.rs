// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for loading, extracting and comparing versions.
//!
//! These tests drive the library the way the binary does, against real files
//! on disk.

mod common;

use cfgcompat::prelude::*;
use common::{config_file, json_with_version, yaml_with_version};

#[test]
fn test_json_default_key_extracts_exact_string() {
    let file = json_with_version("version", "1.0.0");

    let doc = load(file.path(), ConfigFormat::Json).unwrap();
    let configured = extract(&doc, &VersionKey::default()).unwrap();

    assert_eq!(configured, "1.0.0");
}

#[test]
fn test_yaml_custom_key() {
    let file = yaml_with_version("config_version", "1.2.0");

    let doc = load(file.path(), ConfigFormat::Yaml).unwrap();
    let configured = extract(&doc, &VersionKey::from("config_version")).unwrap();

    assert_eq!(configured, "1.2.0");
    assert!(check(&configured, "1.2.5").unwrap());
}

#[test]
fn test_yaml_document_with_other_content() {
    let file = config_file(
        "yml",
        r#"
name: billing-service
version: "2.4.1"
database:
  host: localhost
  port: 5432
features:
  - audit
  - export
"#,
    );

    let doc = load(file.path(), ConfigFormat::Yaml).unwrap();
    assert_eq!(doc.len(), 4);

    let configured = extract(&doc, &VersionKey::default()).unwrap();
    assert!(check(&configured, "2.5.0").unwrap());
}

#[test]
fn test_missing_key_names_the_key() {
    let file = json_with_version("version", "1.0.0");
    let doc = load(file.path(), ConfigFormat::Json).unwrap();

    let err = extract(&doc, &VersionKey::from("schema_version")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingVersion);
    assert!(err.to_string().contains("'schema_version'"));
}

#[test]
fn test_empty_version_is_missing() {
    let file = json_with_version("version", "");
    let doc = load(file.path(), ConfigFormat::Json).unwrap();

    let err = extract(&doc, &VersionKey::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingVersion);
}

#[test]
fn test_falsy_yaml_versions_are_missing() {
    for literal in ["0", "false", "null", "~", "''"] {
        let file = config_file("yaml", &format!("version: {}\n", literal));
        let doc = load(file.path(), ConfigFormat::Yaml).unwrap();

        let err = extract(&doc, &VersionKey::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingVersion, "literal {}", literal);
    }
}

#[test]
fn test_quoted_zero_string_is_present() {
    let file = config_file("yaml", "version: '0'\n");
    let doc = load(file.path(), ConfigFormat::Yaml).unwrap();

    let configured = extract(&doc, &VersionKey::default()).unwrap();
    assert_eq!(configured, "0");

    let err = check(&configured, "1.0.0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
}

#[test]
fn test_numeric_yaml_version_fails_format_check() {
    let file = config_file("yaml", "version: 1.2\n");
    let doc = load(file.path(), ConfigFormat::Yaml).unwrap();

    let configured = extract(&doc, &VersionKey::default()).unwrap();
    let err = check(&configured, "1.2.0").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidVersionFormat);
}

#[test]
fn test_unsupported_format_tag() {
    let file = json_with_version("version", "1.0.0");

    let err = FileLoader::new().load_tagged(file.path(), "toml").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_malformed_json() {
    let file = config_file("json", r#"{"version": "1.0.0""#);

    let err = load(file.path(), ConfigFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_malformed_yaml() {
    let file = config_file("yaml", "version: [1.0.0\n");

    let err = load(file.path(), ConfigFormat::Yaml).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let err = load(&path, ConfigFormat::Json).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_version_check_end_to_end() {
    let file = yaml_with_version("version", "1.4.9");

    let compatible = VersionCheck::builder()
        .config_path(file.path())
        .format(ConfigFormat::Yaml)
        .app_version("1.5.0")
        .build()
        .unwrap()
        .run()
        .unwrap();
    assert!(compatible);
}

#[test]
fn test_version_check_reports_mismatch_reason() {
    let file = json_with_version("version", "1.5.0");

    let err = VersionCheck::builder()
        .config_path(file.path())
        .format(ConfigFormat::Json)
        .app_version("1.4.9")
        .build()
        .unwrap()
        .run()
        .unwrap_err();

    match err {
        CheckError::VersionIncompatibility {
            config_version,
            app_version,
            reason,
        } => {
            assert_eq!(config_version, "1.5.0");
            assert_eq!(app_version, "1.4.9");
            assert_eq!(reason, MismatchReason::Minor);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_repeated_key_keeps_last_value_in_both_formats() {
    let json = config_file("json", r#"{"version": "9.0.0", "version": "1.0.0"}"#);
    let yaml = config_file("yaml", "version: 9.0.0\nversion: 1.0.0\n");

    for (file, format) in [(&json, ConfigFormat::Json), (&yaml, ConfigFormat::Yaml)] {
        let doc = load(file.path(), format).unwrap();
        let configured = extract(&doc, &VersionKey::default()).unwrap();

        assert_eq!(configured, "1.0.0");
        assert!(check(&configured, "1.0.0").unwrap());
    }
}

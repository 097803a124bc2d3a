// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end tests for the `cfgcompat` binary.
//!
//! Validates exit codes, the success line on stdout, and that diagnostics go
//! to stderr rather than stdout.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use common::{config_file, json_with_version, yaml_with_version};
use predicates::prelude::*;

const SUCCESS_LINE: &str = "Configuration version is compatible.";

fn cfgcompat() -> Command {
    cargo_bin_cmd!("cfgcompat")
}

#[test]
fn test_compatible_json_exits_zero() {
    let file = json_with_version("version", "1.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .success()
        .code(0)
        .stdout(format!("{}\n", SUCCESS_LINE));
}

#[test]
fn test_incompatible_json_exits_one() {
    let file = json_with_version("version", "2.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(SUCCESS_LINE).not())
        .stderr(predicate::str::contains("Major version mismatch"));
}

#[test]
fn test_yaml_custom_key_long_flags() {
    let file = yaml_with_version("config_version", "1.2.0");

    cfgcompat()
        .arg("--config")
        .arg(file.path())
        .args([
            "--app-version",
            "1.2.7",
            "--config-type",
            "yaml",
            "--version-key",
            "config_version",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(SUCCESS_LINE));
}

#[test]
fn test_minor_mismatch_exits_one() {
    let file = yaml_with_version("version", "1.5.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.4.9", "-t", "yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Minor version mismatch"));
}

#[test]
fn test_missing_file_exits_one() {
    let dir = tempfile::tempdir().unwrap();

    cfgcompat()
        .arg("-c")
        .arg(dir.path().join("absent.json"))
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn test_malformed_document_exits_one() {
    let file = config_file("json", "{ not json");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error decoding JSON file"));
}

#[test]
fn test_missing_version_key_exits_one() {
    let file = json_with_version("name", "demo");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Version key 'version' not found in configuration file.",
        ));
}

#[test]
fn test_invalid_app_version_exits_one() {
    let file = json_with_version("version", "1.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0", "-t", "json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Invalid version format. Expected major.minor.patch.",
        ));
}

#[test]
fn test_verbose_logs_loaded_path() {
    let file = json_with_version("version", "1.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully loaded config file"));
}

#[test]
fn test_quiet_hides_debug_output() {
    let file = json_with_version("version", "1.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Successfully loaded config file").not())
        .stderr(predicate::str::contains("is compatible with application version 1.0.0"));
}

#[test]
fn test_unknown_config_type_is_usage_error() {
    let file = json_with_version("version", "1.0.0");

    cfgcompat()
        .arg("-c")
        .arg(file.path())
        .args(["-a", "1.0.0", "-t", "toml"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains(SUCCESS_LINE).not());
}

#[test]
fn test_help_lists_flags() {
    cfgcompat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("--app-version"))
        .stdout(predicate::str::contains("--version-key"))
        .stdout(predicate::str::contains("--config-type"))
        .stdout(predicate::str::contains("10 MiB"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag_prints_package_version() {
    cfgcompat()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("cfgcompat {}\n", env!("CARGO_PKG_VERSION")));
}


// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture helpers shared by the integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `content` to a temporary file with the given extension.
///
/// The file is removed when the returned handle is dropped.
#[allow(dead_code)]
pub fn config_file(extension: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("cfgcompat-")
        .suffix(&format!(".{}", extension))
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Writes a JSON document of the form `{"<key>": "<version>"}`.
#[allow(dead_code)]
pub fn json_with_version(key: &str, version: &str) -> NamedTempFile {
    config_file("json", &format!(r#"{{"{}": "{}"}}"#, key, version))
}

/// Writes a YAML document of the form `<key>: <version>`.
#[allow(dead_code)]
pub fn yaml_with_version(key: &str, version: &str) -> NamedTempFile {
    config_file("yaml", &format!("{}: {}\n", key, version))
}

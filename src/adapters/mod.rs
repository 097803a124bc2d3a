// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing format, file and command-line implementations.
//!
//! This module contains concrete implementations of the ports: one
//! `DocumentParser` per supported format, the loader that reads files from
//! disk, and the command-line definition of the binary.

pub mod cli;
pub mod file;
pub mod json;
pub mod yaml;

pub use cli::{Cli, ConfigType};
pub use file::{load, FileLoader, MAX_CONFIG_FILE_SIZE};
pub use json::JsonParser;
pub use yaml::YamlParser;

use crate::domain::ConfigFormat;
use crate::ports::DocumentParser;

/// Returns the parser for `format`.
pub fn parser_for(format: ConfigFormat) -> Box<dyn DocumentParser> {
    match format {
        ConfigFormat::Json => Box::new(JsonParser::new()),
        ConfigFormat::Yaml => Box::new(YamlParser::new()),
    }
}

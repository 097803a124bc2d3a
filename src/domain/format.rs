// SPDX-License-Identifier: MIT OR Apache-2.0

//! Supported configuration document formats.

use crate::domain::errors::{CheckError, Result};
use std::fmt;
use std::str::FromStr;

/// The serialization format of a configuration document.
///
/// Internal callers pick a variant directly; text tags coming from outside the
/// crate go through [`FromStr`], which accepts exactly `json` and `yaml`.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::ConfigFormat;
///
/// let format: ConfigFormat = "yaml".parse().unwrap();
/// assert_eq!(format, ConfigFormat::Yaml);
/// assert!("toml".parse::<ConfigFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Strict JSON
    Json,
    /// YAML, loaded as plain data
    Yaml,
}

impl ConfigFormat {
    /// Returns the tag used for this format on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }

    /// Returns the display name of this format (`JSON` or `YAML`).
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }
}

impl FromStr for ConfigFormat {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "json" => Ok(ConfigFormat::Json),
            "yaml" => Ok(ConfigFormat::Yaml),
            _ => Err(CheckError::InvalidArgument {
                message: "format must be json or yaml".to_string(),
            }),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

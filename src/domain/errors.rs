// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the version check.
//!
//! Every failure of the loader, the extractor or the comparator is a variant of
//! [`CheckError`]. Callers that need to branch on the failure use
//! [`CheckError::kind`] rather than matching on the variant fields.

use crate::domain::format::ConfigFormat;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Why a configured version was rejected by the compatibility rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MismatchReason {
    /// The configured major version is newer than the application's.
    Major,
    /// Same major version, but the configured minor version is newer.
    Minor,
}

impl MismatchReason {
    /// Returns the stable tag for this reason (`MAJOR_MISMATCH` or `MINOR_MISMATCH`).
    pub fn as_str(&self) -> &'static str {
        match self {
            MismatchReason::Major => "MAJOR_MISMATCH",
            MismatchReason::Minor => "MINOR_MISMATCH",
        }
    }

    /// Human readable description used in log and error messages.
    pub fn description(&self) -> &'static str {
        match self {
            MismatchReason::Major => "Major version mismatch",
            MismatchReason::Minor => "Minor version mismatch",
        }
    }
}

impl fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a [`CheckError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The configuration file does not exist or cannot be opened.
    NotFound,
    /// The configuration file exceeds the size limit.
    FileTooLarge,
    /// The configuration file is not a valid document of the requested format.
    Parse,
    /// An argument (such as the format tag) is not acceptable.
    InvalidArgument,
    /// The version key is absent or holds an empty value.
    MissingVersion,
    /// A version string is not `major.minor.patch`.
    InvalidVersionFormat,
    /// The configured version is newer than the application allows.
    VersionIncompatibility,
}

/// The error type for every version check operation.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::{CheckError, ErrorKind};
///
/// let error = CheckError::MissingVersion {
///     key: "version".to_string(),
/// };
/// assert_eq!(error.kind(), ErrorKind::MissingVersion);
/// assert_eq!(
///     error.to_string(),
///     "Version key 'version' not found in configuration file."
/// );
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CheckError {
    /// The configuration file could not be opened.
    #[error("Configuration file not found: {}", .path.display())]
    NotFound {
        /// The path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is larger than the loader accepts.
    #[error("Configuration file too large: {size} bytes (max {max} bytes)")]
    FileTooLarge {
        /// The path that was requested
        path: PathBuf,
        /// Size of the file on disk
        size: u64,
        /// Maximum accepted size
        max: u64,
    },

    /// The document could not be decoded.
    #[error("Error decoding {format} file: {message}")]
    Parse {
        /// Name of the format being decoded (`JSON` or `YAML`)
        format: &'static str,
        /// The decoder's description of the problem
        message: String,
        /// The underlying decoder error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An argument was rejected before any work was done.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What was wrong with the argument
        message: String,
    },

    /// The version key is absent from the document or its value is empty.
    #[error("Version key '{key}' not found in configuration file.")]
    MissingVersion {
        /// The key that was looked up
        key: String,
    },

    /// A version string does not have exactly three integer components.
    #[error("Invalid version format. Expected major.minor.patch.")]
    InvalidVersionFormat {
        /// The offending version string
        version: String,
    },

    /// The configured version is not compatible with the application version.
    #[error(
        "Configuration version {config_version} is not compatible with application version {app_version} ({}).",
        .reason.description()
    )]
    VersionIncompatibility {
        /// The version declared by the configuration document
        config_version: String,
        /// The version of the running application
        app_version: String,
        /// Which component triggered the mismatch
        reason: MismatchReason,
    },
}

impl CheckError {
    /// Returns the kind tag of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::NotFound { .. } => ErrorKind::NotFound,
            CheckError::FileTooLarge { .. } => ErrorKind::FileTooLarge,
            CheckError::Parse { .. } => ErrorKind::Parse,
            CheckError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            CheckError::MissingVersion { .. } => ErrorKind::MissingVersion,
            CheckError::InvalidVersionFormat { .. } => ErrorKind::InvalidVersionFormat,
            CheckError::VersionIncompatibility { .. } => ErrorKind::VersionIncompatibility,
        }
    }

    /// Creates a `Parse` error from a JSON decoder error.
    pub fn from_json_error(err: serde_json::Error) -> Self {
        CheckError::Parse {
            format: ConfigFormat::Json.name(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a `Parse` error from a YAML decoder error.
    pub fn from_yaml_error(err: serde_yaml::Error) -> Self {
        CheckError::Parse {
            format: ConfigFormat::Yaml.name(),
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for version check operations.
pub type Result<T> = std::result::Result<T, CheckError>;

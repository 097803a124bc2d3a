// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end version check.
//!
//! This module ties the loader, the extractor and the comparator together:
//! load the document, pull the configured version out of it, and compare it
//! with the application version.

use crate::adapters::FileLoader;
use crate::domain::{CheckError, ConfigFormat, Result, VersionKey};
use crate::service::{check, extract};
use std::path::{Path, PathBuf};

/// A fully specified version check.
///
/// # Examples
///
/// ```rust,no_run
/// use cfgcompat::domain::ConfigFormat;
/// use cfgcompat::service::VersionCheck;
///
/// # fn main() -> cfgcompat::domain::Result<()> {
/// let compatible = VersionCheck::builder()
///     .config_path("/etc/myapp/config.yaml")
///     .format(ConfigFormat::Yaml)
///     .version_key("config_version")
///     .app_version("1.2.0")
///     .build()?
///     .run()?;
/// assert!(compatible);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VersionCheck {
    config_path: PathBuf,
    format: ConfigFormat,
    version_key: VersionKey,
    app_version: String,
    loader: FileLoader,
}

impl VersionCheck {
    /// Creates a new builder.
    pub fn builder() -> VersionCheckBuilder {
        VersionCheckBuilder::new()
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Format the configuration file is parsed as.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// Key holding the configured version.
    pub fn version_key(&self) -> &VersionKey {
        &self.version_key
    }

    /// Version of the running application.
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Runs load, extract and compare in order.
    ///
    /// Returns `Ok(true)` when the configured version is compatible, or the
    /// first error encountered, unmodified.
    pub fn run(&self) -> Result<bool> {
        let doc = self.loader.load(&self.config_path, self.format)?;
        let config_version = extract(&doc, &self.version_key)?;
        check(&config_version, &self.app_version)
    }
}

/// Builder for [`VersionCheck`].
///
/// `config_path`, `format` and `app_version` are required; `version_key`
/// defaults to `version`.
#[derive(Debug, Clone, Default)]
pub struct VersionCheckBuilder {
    config_path: Option<PathBuf>,
    format: Option<ConfigFormat>,
    version_key: Option<VersionKey>,
    app_version: Option<String>,
    loader: Option<FileLoader>,
}

impl VersionCheckBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration file to check.
    pub fn config_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the format of the configuration file.
    pub fn format(mut self, format: ConfigFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Sets the key holding the configured version.
    pub fn version_key(mut self, key: impl Into<VersionKey>) -> Self {
        self.version_key = Some(key.into());
        self
    }

    /// Sets the version of the running application.
    pub fn app_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self
    }

    /// Replaces the default file loader.
    pub fn loader(mut self, loader: FileLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Builds the check.
    ///
    /// Fails with `InvalidArgument` naming the first required field not set.
    pub fn build(self) -> Result<VersionCheck> {
        Ok(VersionCheck {
            config_path: self.config_path.ok_or_else(|| missing("config_path"))?,
            format: self.format.ok_or_else(|| missing("format"))?,
            version_key: self.version_key.unwrap_or_default(),
            app_version: self.app_version.ok_or_else(|| missing("app_version"))?,
            loader: self.loader.unwrap_or_default(),
        })
    }
}

fn missing(field: &str) -> CheckError {
    let err = CheckError::InvalidArgument {
        message: format!("{} is required", field),
    };
    tracing::error!("{}", err);
    err
}

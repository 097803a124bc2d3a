// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file loader.
//!
//! This module reads a configuration file from disk and hands its content to
//! the parser for the requested format.

use crate::adapters::parser_for;
use crate::domain::{CheckError, ConfigDocument, ConfigFormat, Result};
use std::fs;
use std::path::Path;

/// Maximum allowed size for configuration files (10MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Loads configuration documents from disk.
///
/// The file is opened, read in full and closed within a single call. Every
/// failure is logged once at error level before it is returned.
///
/// # Examples
///
/// ```rust,no_run
/// use cfgcompat::adapters::FileLoader;
/// use cfgcompat::domain::ConfigFormat;
///
/// let doc = FileLoader::new()
///     .load("/etc/myapp/config.yaml", ConfigFormat::Yaml)
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileLoader {
    max_size: u64,
}

impl FileLoader {
    /// Creates a loader with the default size limit.
    pub fn new() -> Self {
        Self {
            max_size: MAX_CONFIG_FILE_SIZE,
        }
    }

    /// Sets the largest file size, in bytes, the loader will read.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Loads and parses the file at `path` as `format`.
    ///
    /// # Errors
    ///
    /// * `NotFound` - the file does not exist or cannot be opened
    /// * `FileTooLarge` - the file exceeds the size limit
    /// * `Parse` - the content is not valid UTF-8 or not a valid document
    pub fn load<P: AsRef<Path>>(&self, path: P, format: ConfigFormat) -> Result<ConfigDocument> {
        let path = path.as_ref();

        let result = self
            .read(path, format)
            .and_then(|content| parser_for(format).parse(&content));

        match result {
            Ok(doc) => {
                tracing::debug!("Successfully loaded config file: {}", path.display());
                Ok(doc)
            }
            Err(e) => {
                tracing::error!("{}", e);
                Err(e)
            }
        }
    }

    /// Loads the file at `path`, taking the format from a text tag.
    ///
    /// The tag is validated before the filesystem is touched, so an unknown
    /// tag fails with `InvalidArgument` even when `path` does not exist.
    pub fn load_tagged<P: AsRef<Path>>(&self, path: P, tag: &str) -> Result<ConfigDocument> {
        let format = tag.parse::<ConfigFormat>().map_err(|e| {
            tracing::error!("{}", e);
            e
        })?;
        self.load(path, format)
    }

    fn read(&self, path: &Path, format: ConfigFormat) -> Result<String> {
        let not_found = |source: std::io::Error| CheckError::NotFound {
            path: path.to_path_buf(),
            source,
        };

        let metadata = fs::metadata(path).map_err(not_found)?;
        if metadata.len() > self.max_size {
            return Err(CheckError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max: self.max_size,
            });
        }

        let bytes = fs::read(path).map_err(not_found)?;
        String::from_utf8(bytes).map_err(|e| CheckError::Parse {
            format: format.name(),
            message: format!("file is not valid UTF-8: {}", e),
            source: Some(Box::new(e)),
        })
    }
}

impl Default for FileLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads and parses the file at `path` with the default loader.
pub fn load<P: AsRef<Path>>(path: P, format: ConfigFormat) -> Result<ConfigDocument> {
    FileLoader::new().load(path, format)
}

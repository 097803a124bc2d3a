// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration version compatibility checking.
//!
//! This crate checks that a JSON or YAML configuration file declares a version
//! that the running application can accept. The check has three steps:
//!
//! 1. **Load** the file into a [`ConfigDocument`](domain::ConfigDocument)
//!    ([`adapters::FileLoader`]).
//! 2. **Extract** the configured version from a top-level key
//!    ([`service::extract()`]).
//! 3. **Compare** it with the application version ([`service::check()`]).
//!
//! A configured version is compatible unless its major version is newer than
//! the application's, or the majors are equal and its minor version is newer.
//! Patch numbers are never compared.
//!
//! # Architecture
//!
//! - **Domain Layer**: Core types and rules (`ConfigDocument`, `Version`, errors)
//! - **Ports**: The `DocumentParser` interface
//! - **Adapters**: JSON and YAML parsers, the file loader, the command line
//! - **Service**: Extraction, comparison, and the end-to-end `VersionCheck`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use cfgcompat::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let compatible = VersionCheck::builder()
//!     .config_path("config.json")
//!     .format(ConfigFormat::Json)
//!     .app_version("1.4.0")
//!     .build()?
//!     .run()?;
//! assert!(compatible);
//! # Ok(())
//! # }
//! ```
//!
//! The steps can also be called one at a time:
//!
//! ```rust,no_run
//! use cfgcompat::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let doc = load("config.yaml", ConfigFormat::Yaml)?;
//! let configured = extract(&doc, &VersionKey::from("config_version"))?;
//! check(&configured, "1.2.0")?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod service;

/// Commonly used types and functions.
///
/// This module re-exports the most commonly used items for convenient access.
pub mod prelude {
    pub use crate::adapters::{load, FileLoader, JsonParser, YamlParser};
    pub use crate::domain::{
        CheckError, ConfigDocument, ConfigFormat, DocumentValue, ErrorKind, MismatchReason,
        Result, Version, VersionKey,
    };
    pub use crate::logging::LogConfig;
    pub use crate::ports::DocumentParser;
    pub use crate::service::{check, extract, VersionCheck, VersionCheckBuilder};
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and rules.
//!
//! This module contains the types shared by every part of the crate: parsed
//! documents, version numbers and keys, the supported formats, and the error
//! taxonomy. It has no knowledge of files, decoders or the command line.

pub mod document;
pub mod errors;
pub mod format;
pub mod version;
pub mod version_key;

// Re-export commonly used types
pub use document::{ConfigDocument, DocumentValue};
pub use errors::{CheckError, ErrorKind, MismatchReason, Result};
pub use format::ConfigFormat;
pub use version::Version;
pub use version_key::VersionKey;

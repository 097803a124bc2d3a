// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the version check operations.
//!
//! This module contains the extractor and the comparator, and the
//! `VersionCheck` that runs them after the loader.

pub mod compare;
pub mod extract;
pub mod version_check;

// Re-export commonly used types
pub use compare::check;
pub use extract::extract;
pub use version_check::{VersionCheck, VersionCheckBuilder};

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version key newtype.
//!
//! This module provides the `VersionKey` type, the name of the top-level entry
//! in a configuration document that holds the configured version.

use std::fmt;

/// The key under which a configuration document declares its version.
///
/// Lookups are made against the top-level mapping only, so a key such as
/// `app.version` names a single top-level entry, not a nested path.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::VersionKey;
///
/// assert_eq!(VersionKey::default().as_str(), "version");
///
/// let key = VersionKey::from("config_version");
/// assert_eq!(key.as_str(), "config_version");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VersionKey(String);

impl VersionKey {
    /// The key used when none is given.
    pub const DEFAULT: &'static str = "version";

    /// Creates a new `VersionKey` from a `String`.
    pub fn new(key: String) -> Self {
        VersionKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for VersionKey {
    fn default() -> Self {
        VersionKey(Self::DEFAULT.to_string())
    }
}

impl From<String> for VersionKey {
    fn from(s: String) -> Self {
        VersionKey(s)
    }
}

impl From<&str> for VersionKey {
    fn from(s: &str) -> Self {
        VersionKey(s.to_string())
    }
}

impl AsRef<str> for VersionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Three-part version numbers.
//!
//! This module provides the `Version` type. Only the strict `major.minor.patch`
//! form is understood: three dot-separated runs of ASCII digits, nothing more.

use crate::domain::errors::{CheckError, MismatchReason, Result};
use std::fmt;
use std::str::FromStr;

/// A `major.minor.patch` version.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::Version;
///
/// let version: Version = "1.4.2".parse().unwrap();
/// assert_eq!(version.major, 1);
/// assert_eq!(version.minor, 4);
/// assert_eq!(version.patch, 2);
/// assert_eq!(version.to_string(), "1.4.2");
///
/// assert!("1.4".parse::<Version>().is_err());
/// assert!("1.4.x".parse::<Version>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major component
    pub major: u64,
    /// Minor component
    pub minor: u64,
    /// Patch component
    pub patch: u64,
}

impl Version {
    /// Creates a version from its three components.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses a version string, returning `InvalidVersionFormat` on any other shape.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || CheckError::InvalidVersionFormat {
            version: s.to_string(),
        };

        let mut parts = s.split('.');
        let mut next = || -> Result<u64> {
            let part = parts.next().ok_or_else(invalid)?;
            parse_component(part).ok_or_else(invalid)
        };
        let major = next()?;
        let minor = next()?;
        let patch = next()?;

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Version::new(major, minor, patch))
    }

    /// Applies the compatibility rule with `self` as the configured version.
    ///
    /// Returns the reason the configured version is too new for `app`, or
    /// `None` when it is compatible. Only major and minor are compared.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgcompat::domain::{MismatchReason, Version};
    ///
    /// let app = Version::new(1, 4, 9);
    /// assert_eq!(Version::new(2, 0, 0).mismatch_with(&app), Some(MismatchReason::Major));
    /// assert_eq!(Version::new(1, 5, 0).mismatch_with(&app), Some(MismatchReason::Minor));
    /// assert_eq!(Version::new(1, 4, 99).mismatch_with(&app), None);
    /// ```
    pub fn mismatch_with(&self, app: &Version) -> Option<MismatchReason> {
        if self.major > app.major {
            Some(MismatchReason::Major)
        } else if self.major == app.major && self.minor > app.minor {
            Some(MismatchReason::Minor)
        } else {
            None
        }
    }
}

// `u64::from_str` accepts a leading '+', so the digits are checked first.
fn parse_component(part: &str) -> Option<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for Version {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

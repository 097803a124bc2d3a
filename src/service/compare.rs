// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version comparison.

use crate::domain::{CheckError, Result, Version};

/// Checks a configured version against the application version.
///
/// Both strings must be `major.minor.patch`. The configured version is
/// compatible unless its major is newer than the application's, or the majors
/// match and its minor is newer. Patch numbers are never compared.
///
/// Returns `Ok(true)` when compatible; every other outcome is an error.
///
/// # Errors
///
/// * `InvalidVersionFormat` - either string is malformed (logged at error level)
/// * `VersionIncompatibility` - the rule is violated (logged at warning level)
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::{CheckError, MismatchReason};
/// use cfgcompat::service::check;
///
/// assert!(check("1.2.99", "1.2.0").unwrap());
///
/// match check("1.5.0", "1.4.9") {
///     Err(CheckError::VersionIncompatibility { reason, .. }) => {
///         assert_eq!(reason, MismatchReason::Minor)
///     }
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
pub fn check(config_version: &str, app_version: &str) -> Result<bool> {
    let (config, app) = match parse_both(config_version, app_version) {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!("{}", e);
            return Err(e);
        }
    };

    if let Some(reason) = config.mismatch_with(&app) {
        let err = CheckError::VersionIncompatibility {
            config_version: config_version.to_string(),
            app_version: app_version.to_string(),
            reason,
        };
        tracing::warn!("{}", err);
        return Err(err);
    }

    tracing::info!(
        "Configuration version {} is compatible with application version {}.",
        config_version,
        app_version
    );
    Ok(true)
}

fn parse_both(config_version: &str, app_version: &str) -> Result<(Version, Version)> {
    Ok((config_version.parse()?, app_version.parse()?))
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Version extraction from a loaded document.

use crate::domain::{CheckError, ConfigDocument, Result, VersionKey};

/// Returns the configured version stored under `key`.
///
/// The key is looked up in the top-level mapping only. A value that is absent
/// or falsy (null, `false`, zero, empty string or collection) counts as
/// missing. Any other value is returned in its string form, unvalidated.
///
/// # Errors
///
/// `MissingVersion` naming `key`, logged at error level.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::{ConfigDocument, DocumentValue, VersionKey};
/// use cfgcompat::service::extract;
///
/// let doc = ConfigDocument::from_entries([("version", DocumentValue::from("1.0.0"))]);
/// assert_eq!(extract(&doc, &VersionKey::default()).unwrap(), "1.0.0");
/// assert!(extract(&doc, &VersionKey::from("schema")).is_err());
/// ```
pub fn extract(doc: &ConfigDocument, key: &VersionKey) -> Result<String> {
    match doc.get(key.as_str()) {
        Some(value) if value.is_truthy() => Ok(value.to_string()),
        _ => {
            let err = CheckError::MissingVersion {
                key: key.as_str().to_string(),
            };
            tracing::error!("{}", err);
            Err(err)
        }
    }
}

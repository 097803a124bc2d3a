// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document parser trait definition.
//!
//! This module defines the `DocumentParser` trait, which provides an interface for
//! turning the text of a configuration file into a [`ConfigDocument`].

use crate::domain::{ConfigDocument, ConfigFormat, Result};

/// A trait for parsing configuration files.
///
/// Implementations decode one serialization format and convert the decoder's
/// native tree into a format-independent [`ConfigDocument`]. Decoding failures
/// must be reported as `CheckError::Parse`, carrying the decoder's description.
///
/// # Examples
///
/// ```rust
/// use cfgcompat::domain::{ConfigDocument, ConfigFormat, DocumentValue, Result};
/// use cfgcompat::ports::DocumentParser;
///
/// struct FixedParser;
///
/// impl DocumentParser for FixedParser {
///     fn parse(&self, _content: &str) -> Result<ConfigDocument> {
///         Ok(ConfigDocument::from_entries([("version", DocumentValue::from("1.0.0"))]))
///     }
///
///     fn format(&self) -> ConfigFormat {
///         ConfigFormat::Json
///     }
/// }
///
/// let doc = FixedParser.parse("").unwrap();
/// assert_eq!(doc.len(), 1);
/// ```
pub trait DocumentParser {
    /// Parses configuration content into a document.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - The parsed top-level mapping
    /// * `Err(CheckError::Parse)` - The content is malformed or its root is not a mapping
    fn parse(&self, content: &str) -> Result<ConfigDocument>;

    /// Returns the format this parser decodes.
    fn format(&self) -> ConfigFormat;
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed configuration documents.
//!
//! This module provides `ConfigDocument`, the format-independent result of
//! loading a JSON or YAML file, and `DocumentValue`, the value tree it holds.

use crate::domain::errors::{CheckError, Result};
use crate::domain::format::ConfigFormat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A value inside a configuration document.
///
/// Both the JSON and the YAML parsers convert their native trees into this
/// type, so everything downstream of the loader is format independent.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DocumentValue {
    /// An explicit null
    Null,
    /// A boolean
    Bool(bool),
    /// An integer that fits in an `i64`
    Integer(i64),
    /// Any other number
    Float(f64),
    /// A string
    String(String),
    /// An ordered list of values
    Sequence(Vec<DocumentValue>),
    /// A mapping with string keys
    Mapping(BTreeMap<String, DocumentValue>),
}

impl DocumentValue {
    /// Returns `false` for values that count as empty.
    ///
    /// Null, `false`, zero, the empty string, the empty sequence and the empty
    /// mapping are all falsy. A version key holding any of them is treated the
    /// same as a missing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use cfgcompat::domain::DocumentValue;
    ///
    /// assert!(DocumentValue::String("1.0.0".to_string()).is_truthy());
    /// assert!(!DocumentValue::String(String::new()).is_truthy());
    /// assert!(!DocumentValue::Integer(0).is_truthy());
    /// assert!(!DocumentValue::Bool(false).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            DocumentValue::Null => false,
            DocumentValue::Bool(b) => *b,
            DocumentValue::Integer(i) => *i != 0,
            DocumentValue::Float(f) => *f != 0.0,
            DocumentValue::String(s) => !s.is_empty(),
            DocumentValue::Sequence(seq) => !seq.is_empty(),
            DocumentValue::Mapping(map) => !map.is_empty(),
        }
    }
}

impl fmt::Display for DocumentValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentValue::Null => f.write_str("null"),
            DocumentValue::Bool(b) => write!(f, "{}", b),
            DocumentValue::Integer(i) => write!(f, "{}", i),
            DocumentValue::Float(n) => write!(f, "{}", n),
            DocumentValue::String(s) => f.write_str(s),
            DocumentValue::Sequence(_) | DocumentValue::Mapping(_) => {
                let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&rendered)
            }
        }
    }
}

impl From<&str> for DocumentValue {
    fn from(s: &str) -> Self {
        DocumentValue::String(s.to_string())
    }
}

/// A configuration document loaded from disk.
///
/// The top level of a document is always a mapping. Lookups only consider
/// that top level.
///
/// # Examples
///
/// ```
/// use cfgcompat::domain::{ConfigDocument, DocumentValue};
///
/// let doc = ConfigDocument::from_entries([("version", DocumentValue::from("1.0.0"))]);
/// assert_eq!(doc.get("version"), Some(&DocumentValue::from("1.0.0")));
/// assert!(doc.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigDocument {
    entries: BTreeMap<String, DocumentValue>,
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from key/value pairs.
    pub fn from_entries<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, DocumentValue)>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Builds a document from the root value produced by a parser.
    ///
    /// Returns a `Parse` error if the root is anything but a mapping, including
    /// the null produced by an empty file.
    pub fn from_root(root: DocumentValue, format: ConfigFormat) -> Result<Self> {
        match root {
            DocumentValue::Mapping(entries) => Ok(Self { entries }),
            other => Err(CheckError::Parse {
                format: format.name(),
                message: format!(
                    "top-level value must be a mapping, found {}",
                    describe(&other)
                ),
                source: None,
            }),
        }
    }

    /// Returns the value stored under `key` in the top-level mapping.
    pub fn get(&self, key: &str) -> Option<&DocumentValue> {
        self.entries.get(key)
    }

    /// Returns the top-level keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns the number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document has no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe(value: &DocumentValue) -> &'static str {
    match value {
        DocumentValue::Null => "an empty document",
        DocumentValue::Bool(_) => "a boolean",
        DocumentValue::Integer(_) | DocumentValue::Float(_) => "a number",
        DocumentValue::String(_) => "a string",
        DocumentValue::Sequence(_) => "a sequence",
        DocumentValue::Mapping(_) => "a mapping",
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON document parser.

use crate::domain::{CheckError, ConfigDocument, ConfigFormat, DocumentValue, Result};
use crate::ports::DocumentParser;

/// Strict JSON parser implementation.
///
/// # Examples
///
/// ```rust
/// use cfgcompat::adapters::JsonParser;
/// use cfgcompat::domain::DocumentValue;
/// use cfgcompat::ports::DocumentParser;
///
/// let parser = JsonParser::new();
/// let doc = parser.parse(r#"{"version": "1.0.0"}"#).unwrap();
/// assert_eq!(doc.get("version"), Some(&DocumentValue::from("1.0.0")));
/// ```
#[derive(Debug, Clone)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new JSON parser.
    pub fn new() -> Self {
        JsonParser
    }

    fn convert(value: serde_json::Value) -> DocumentValue {
        match value {
            serde_json::Value::Null => DocumentValue::Null,
            serde_json::Value::Bool(b) => DocumentValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => DocumentValue::Integer(i),
                None => DocumentValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => DocumentValue::String(s),
            serde_json::Value::Array(arr) => {
                DocumentValue::Sequence(arr.into_iter().map(Self::convert).collect())
            }
            serde_json::Value::Object(obj) => DocumentValue::Mapping(
                obj.into_iter()
                    .map(|(k, v)| (k, Self::convert(v)))
                    .collect(),
            ),
        }
    }
}

impl Default for JsonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for JsonParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let value: serde_json::Value =
            serde_json::from_str(content).map_err(CheckError::from_json_error)?;

        ConfigDocument::from_root(Self::convert(value), ConfigFormat::Json)
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Json
    }
}

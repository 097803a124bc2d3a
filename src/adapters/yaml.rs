// SPDX-License-Identifier: MIT OR Apache-2.0

//! YAML document parser.
//!
//! YAML is decoded by `serde_yaml` straight into `DocumentValue`; no
//! application types are ever constructed from the document, and custom tags
//! are refused.

use crate::domain::{CheckError, ConfigDocument, ConfigFormat, DocumentValue, Result};
use crate::ports::DocumentParser;
use serde::de::{self, Deserialize, Deserializer, EnumAccess, MapAccess, SeqAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

const MERGE_KEY: &str = "<<";

/// YAML parser implementation.
///
/// Merge keys (`<<`) are resolved, with explicit keys taking precedence over
/// merged ones. A key repeated within one mapping keeps its last value.
/// Mapping keys that are not strings cannot be addressed by a version key and
/// are dropped.
///
/// # Examples
///
/// ```rust
/// use cfgcompat::adapters::YamlParser;
/// use cfgcompat::domain::DocumentValue;
/// use cfgcompat::ports::DocumentParser;
///
/// let parser = YamlParser::new();
/// let doc = parser.parse("version: 1.2.3\nname: demo").unwrap();
/// assert_eq!(doc.get("version"), Some(&DocumentValue::from("1.2.3")));
/// ```
#[derive(Debug, Clone)]
pub struct YamlParser;

impl YamlParser {
    /// Creates a new YAML parser.
    pub fn new() -> Self {
        YamlParser
    }
}

impl Default for YamlParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentParser for YamlParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let YamlNode(root) = serde_yaml::from_str(content).map_err(CheckError::from_yaml_error)?;

        ConfigDocument::from_root(root, ConfigFormat::Yaml)
    }

    fn format(&self) -> ConfigFormat {
        ConfigFormat::Yaml
    }
}

/// A document value read directly off the YAML event stream.
struct YamlNode(DocumentValue);

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NodeVisitor).map(YamlNode)
    }
}

type NodeResult<E> = std::result::Result<DocumentValue, E>;

struct NodeVisitor;

impl<'de> Visitor<'de> for NodeVisitor {
    type Value = DocumentValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a YAML value")
    }

    fn visit_unit<E: de::Error>(self) -> NodeResult<E> {
        Ok(DocumentValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> NodeResult<E> {
        Ok(DocumentValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> NodeResult<D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> NodeResult<E> {
        Ok(DocumentValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> NodeResult<E> {
        Ok(DocumentValue::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> NodeResult<E> {
        Ok(i64::try_from(v).map_or(DocumentValue::Float(v as f64), DocumentValue::Integer))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> NodeResult<E> {
        Ok(i64::try_from(v).map_or(DocumentValue::Float(v as f64), DocumentValue::Integer))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> NodeResult<E> {
        Ok(i64::try_from(v).map_or(DocumentValue::Float(v as f64), DocumentValue::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> NodeResult<E> {
        Ok(DocumentValue::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> NodeResult<E> {
        Ok(DocumentValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> NodeResult<E> {
        Ok(DocumentValue::String(v))
    }

    fn visit_seq<A>(self, mut seq: A) -> NodeResult<A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(YamlNode(item)) = seq.next_element()? {
            items.push(item);
        }
        Ok(DocumentValue::Sequence(items))
    }

    fn visit_map<A>(self, mut map: A) -> NodeResult<A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = BTreeMap::new();
        let mut merges = Vec::new();

        while let Some(YamlNode(key)) = map.next_key()? {
            let YamlNode(value) = map.next_value()?;
            match key {
                DocumentValue::String(key) if key == MERGE_KEY => merges.push(value),
                DocumentValue::String(key) => {
                    entries.insert(key, value);
                }
                _ => {}
            }
        }

        for merge in merges {
            merge_into(&mut entries, merge).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(DocumentValue::Mapping(entries))
    }

    // serde_yaml hands every node carrying a non-core tag to `visit_enum`.
    fn visit_enum<A>(self, data: A) -> NodeResult<A::Error>
    where
        A: EnumAccess<'de>,
    {
        let (tag, _) = data.variant::<String>()?;
        Err(de::Error::custom(format!(
            "could not determine a constructor for the tag '!{}'",
            tag
        )))
    }
}

/// Copies merged entries into `entries` without overwriting existing keys.
fn merge_into(
    entries: &mut BTreeMap<String, DocumentValue>,
    merge: DocumentValue,
) -> std::result::Result<(), &'static str> {
    let sources = match merge {
        DocumentValue::Mapping(source) => vec![source],
        DocumentValue::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                DocumentValue::Mapping(source) => Ok(source),
                _ => Err("expected a mapping for merging"),
            })
            .collect::<std::result::Result<Vec<_>, _>>()?,
        _ => return Err("expected a mapping or list of mappings for merging"),
    };

    for source in sources {
        for (key, value) in source {
            entries.entry(key).or_insert(value);
        }
    }
    Ok(())
}

//! Text serializers for document trees.
//!
//! A [`Serializer`] turns document text into a root [`Mapping`] and back. Two
//! implementations are provided, [`YamlSerializer`] on top of `serde_yaml` and
//! [`JsonSerializer`] on top of `serde_json`. Both go through the serde
//! library's dynamic `Value` type and then map it onto [`TreeValue`]:
//!
//! - mapping keys that are not strings are stringified (`1: a` has key `"1"`)
//! - integers that do not fit in `i64` become doubles
//! - YAML tags are dropped and their inner value kept
//! - YAML merge keys (`<<: *base`) are applied; explicit keys win
//! - a top-level null (including an empty document) is an empty mapping
//!
//! # Example
//!
//! ```
//! use treepath::document::parser::{JsonSerializer, Serializer, YamlSerializer};
//!
//! let root = YamlSerializer.parse("server:\n  port: 8080\n").unwrap();
//! let json = JsonSerializer.render(&root).unwrap();
//! assert_eq!(JsonSerializer.parse(&json).unwrap(), root);
//! ```

use super::node::{Mapping, ScalarValue, TreeValue};
use crate::error::{Result, TreePathError};

/// Converts between document text and a root mapping.
pub trait Serializer {
    /// Parses `text` into a root mapping.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is malformed, or
    /// [`TreePathError::NotAMapping`] if its top level is a sequence or scalar.
    fn parse(&self, text: &str) -> Result<Mapping>;

    /// Renders `root` as text that [`Serializer::parse`] reads back unchanged.
    fn render(&self, root: &Mapping) -> Result<String>;
}

/// Block-style YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlSerializer;

impl Serializer for YamlSerializer {
    fn parse(&self, text: &str) -> Result<Mapping> {
        if text.trim().is_empty() {
            return Ok(Mapping::new());
        }
        let mut value: serde_yaml::Value = serde_yaml::from_str(text)?;
        value.apply_merge()?;
        into_root(from_yaml(value))
    }

    fn render(&self, root: &Mapping) -> Result<String> {
        let value = serde_yaml::Value::Mapping(yaml_mapping(root));
        Ok(serde_yaml::to_string(&value)?)
    }
}

/// Pretty-printed JSON. Key order is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn parse(&self, text: &str) -> Result<Mapping> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        into_root(from_json(value))
    }

    fn render(&self, root: &Mapping) -> Result<String> {
        let value = serde_json::Value::Object(json_object(root));
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

fn into_root(value: TreeValue) -> Result<Mapping> {
    match value {
        TreeValue::Mapping(entries) => Ok(entries),
        TreeValue::Scalar(ScalarValue::Null) => Ok(Mapping::new()),
        other => Err(TreePathError::NotAMapping(other.kind().name())),
    }
}

/// Converts a `serde_yaml` value into a tree value.
pub fn from_yaml(value: serde_yaml::Value) -> TreeValue {
    use serde_yaml::Value;

    match value {
        Value::Null => TreeValue::null(),
        Value::Bool(b) => TreeValue::from(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                TreeValue::from(i)
            } else {
                n.as_f64().map_or_else(TreeValue::null, TreeValue::from)
            }
        }
        Value::String(s) => TreeValue::from(s),
        Value::Sequence(items) => TreeValue::Sequence(items.into_iter().map(from_yaml).collect()),
        Value::Mapping(entries) => TreeValue::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (yaml_key(key), from_yaml(value)))
                .collect(),
        ),
        Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => from_yaml(other).to_string(),
    }
}

/// Converts a tree value into a `serde_yaml` value.
pub fn to_yaml(value: &TreeValue) -> serde_yaml::Value {
    use serde_yaml::Value;

    match value {
        TreeValue::Scalar(ScalarValue::String(s)) => Value::String(s.clone()),
        TreeValue::Scalar(ScalarValue::Integer(i)) => Value::Number((*i).into()),
        TreeValue::Scalar(ScalarValue::Double(d)) => Value::Number((*d).into()),
        TreeValue::Scalar(ScalarValue::Boolean(b)) => Value::Bool(*b),
        TreeValue::Scalar(ScalarValue::Null) => Value::Null,
        TreeValue::Sequence(items) => Value::Sequence(items.iter().map(to_yaml).collect()),
        TreeValue::Mapping(entries) => Value::Mapping(yaml_mapping(entries)),
    }
}

fn yaml_mapping(entries: &Mapping) -> serde_yaml::Mapping {
    entries
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.clone()), to_yaml(value)))
        .collect()
}

/// Converts a `serde_json` value into a tree value.
pub fn from_json(value: serde_json::Value) -> TreeValue {
    use serde_json::Value;

    match value {
        Value::Null => TreeValue::null(),
        Value::Bool(b) => TreeValue::from(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                TreeValue::from(i)
            } else {
                n.as_f64().map_or_else(TreeValue::null, TreeValue::from)
            }
        }
        Value::String(s) => TreeValue::from(s),
        Value::Array(items) => TreeValue::Sequence(items.into_iter().map(from_json).collect()),
        Value::Object(entries) => TreeValue::Mapping(
            entries
                .into_iter()
                .map(|(key, value)| (key, from_json(value)))
                .collect(),
        ),
    }
}

/// Converts a tree value into a `serde_json` value.
///
/// Non-finite doubles have no JSON form and become `null`.
pub fn to_json(value: &TreeValue) -> serde_json::Value {
    use serde_json::Value;

    match value {
        TreeValue::Scalar(ScalarValue::String(s)) => Value::String(s.clone()),
        TreeValue::Scalar(ScalarValue::Integer(i)) => Value::from(*i),
        TreeValue::Scalar(ScalarValue::Double(d)) => {
            serde_json::Number::from_f64(*d).map_or(Value::Null, Value::Number)
        }
        TreeValue::Scalar(ScalarValue::Boolean(b)) => Value::Bool(*b),
        TreeValue::Scalar(ScalarValue::Null) => Value::Null,
        TreeValue::Sequence(items) => Value::Array(items.iter().map(to_json).collect()),
        TreeValue::Mapping(entries) => Value::Object(json_object(entries)),
    }
}

fn json_object(entries: &Mapping) -> serde_json::Map<String, serde_json::Value> {
    entries
        .iter()
        .map(|(key, value)| (key.clone(), to_json(value)))
        .collect()
}

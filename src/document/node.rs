//! Dynamic tree values.
//!
//! This module provides the recursive value type every other part of treepath
//! operates on. A `TreeValue` is either a scalar, a sequence of values, or a
//! mapping from string keys to values, which is exactly the shape produced by
//! parsing YAML or JSON documents.
//!
//! # Example
//!
//! ```
//! use treepath::document::node::{Mapping, NodeKind, ScalarValue, TreeValue};
//!
//! let mut server = Mapping::new();
//! server.insert("host".to_string(), TreeValue::from("localhost"));
//! server.insert("ports".to_string(), TreeValue::from(vec![80i64, 443]));
//!
//! let root = TreeValue::Mapping(server);
//! assert_eq!(root.kind(), NodeKind::Mapping);
//! assert!(root.as_sequence().is_none());
//! assert_eq!(
//!     root.as_mapping().unwrap()["host"].as_scalar(),
//!     Some(&ScalarValue::String("localhost".to_string()))
//! );
//! ```

use indexmap::IndexMap;
use std::fmt;

/// Keyed container. Insertion order follows the source document, equality
/// does not depend on it.
pub type Mapping = IndexMap<String, TreeValue>;

/// Ordered container.
pub type Sequence = Vec<TreeValue>;

/// The three shapes a node can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Scalar,
    Sequence,
    Mapping,
}

impl NodeKind {
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Scalar => "scalar",
            NodeKind::Sequence => "sequence",
            NodeKind::Mapping => "mapping",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Integer(i64),
    Double(f64),
    Boolean(bool),
    Null,
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::String(s) => f.write_str(s),
            ScalarValue::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part (`4.0`) and switches to
            // exponent notation for very large or small magnitudes.
            ScalarValue::Double(d) => write!(f, "{:?}", d),
            ScalarValue::Boolean(b) => write!(f, "{}", b),
            ScalarValue::Null => f.write_str("null"),
        }
    }
}

/// A node in a dynamically-typed document tree.
///
/// The variant of a node is fixed once it is created. Changing the shape at
/// some location means replacing the binding held by the parent container.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeValue {
    /// A string, number, boolean or null
    Scalar(ScalarValue),
    /// An ordered list of values
    Sequence(Sequence),
    /// String-keyed values
    Mapping(Mapping),
}

impl Default for TreeValue {
    fn default() -> Self {
        TreeValue::Mapping(Mapping::new())
    }
}

impl TreeValue {
    /// Creates an empty mapping node.
    pub fn empty_mapping() -> Self {
        TreeValue::Mapping(Mapping::new())
    }

    /// Creates a null scalar node.
    pub fn null() -> Self {
        TreeValue::Scalar(ScalarValue::Null)
    }

    /// Returns the shape of this node.
    ///
    /// # Example
    ///
    /// ```
    /// use treepath::document::node::{NodeKind, TreeValue};
    ///
    /// assert_eq!(TreeValue::from(3i64).kind(), NodeKind::Scalar);
    /// assert_eq!(TreeValue::from(vec!["a", "b"]).kind(), NodeKind::Sequence);
    /// assert_eq!(TreeValue::empty_mapping().kind(), NodeKind::Mapping);
    /// ```
    pub fn kind(&self) -> NodeKind {
        match self {
            TreeValue::Scalar(_) => NodeKind::Scalar,
            TreeValue::Sequence(_) => NodeKind::Sequence,
            TreeValue::Mapping(_) => NodeKind::Mapping,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, TreeValue::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, TreeValue::Sequence(_))
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, TreeValue::Scalar(_))
    }

    /// Returns true for the null scalar.
    pub fn is_null(&self) -> bool {
        matches!(self, TreeValue::Scalar(ScalarValue::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            TreeValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            TreeValue::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[TreeValue]> {
        match self {
            TreeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            TreeValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            TreeValue::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Canonical string form. Scalars print bare, containers print in a compact
/// flow style (`[a, b]`, `{k: v}`).
impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Scalar(s) => write!(f, "{}", s),
            TreeValue::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            TreeValue::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<ScalarValue> for TreeValue {
    fn from(value: ScalarValue) -> Self {
        TreeValue::Scalar(value)
    }
}

impl From<&str> for TreeValue {
    fn from(value: &str) -> Self {
        TreeValue::Scalar(ScalarValue::String(value.to_string()))
    }
}

impl From<String> for TreeValue {
    fn from(value: String) -> Self {
        TreeValue::Scalar(ScalarValue::String(value))
    }
}

impl From<i64> for TreeValue {
    fn from(value: i64) -> Self {
        TreeValue::Scalar(ScalarValue::Integer(value))
    }
}

impl From<i32> for TreeValue {
    fn from(value: i32) -> Self {
        TreeValue::Scalar(ScalarValue::Integer(i64::from(value)))
    }
}

impl From<f64> for TreeValue {
    fn from(value: f64) -> Self {
        TreeValue::Scalar(ScalarValue::Double(value))
    }
}

impl From<bool> for TreeValue {
    fn from(value: bool) -> Self {
        TreeValue::Scalar(ScalarValue::Boolean(value))
    }
}

impl From<Mapping> for TreeValue {
    fn from(value: Mapping) -> Self {
        TreeValue::Mapping(value)
    }
}

impl<T: Into<TreeValue>> From<Vec<T>> for TreeValue {
    fn from(values: Vec<T>) -> Self {
        TreeValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<TreeValue>> From<Option<T>> for TreeValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_else(TreeValue::null)
    }
}

/// Builds a mapping node from key/value pairs.
///
/// ```
/// use treepath::document::node::TreeValue;
///
/// let node: TreeValue = [("foo", "bar"), ("baz", "bat")].into_iter().collect();
/// assert_eq!(node.to_string(), "{foo: bar, baz: bat}");
/// ```
impl<K: Into<String>, V: Into<TreeValue>> FromIterator<(K, V)> for TreeValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        TreeValue::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

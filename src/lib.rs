//! treepath - path-based access to dynamically-shaped document trees.
//!
//! Documents parsed from YAML or JSON are held as a [`TreeValue`] tree of
//! mappings, sequences and scalars. Values are addressed with separator
//! delimited paths such as `"server.listeners.0.port"`, where a segment is a
//! mapping key or, on a sequence, a position.
//!
//! - [`navigator`] resolves paths and implements get / set / remove
//! - [`view`] layers typed getters over reads
//! - [`convert`] holds the per-type value converters those getters use
//! - [`document`] holds the value model, the serializers, and [`Document`]
//! - [`config`] holds the shared [`Configuration`]
//! - [`file`] loads and saves documents on disk
//!
//! # Quick start
//!
//! ```
//! use treepath::Document;
//!
//! let mut doc = Document::from_yaml_str(
//!     "core: foo\nchildren: [foo, bar]\ninty: \"4\"\n",
//! )
//! .unwrap();
//!
//! let view = doc.view();
//! assert_eq!(view.get_string("children.0").as_deref(), Some("foo"));
//! assert_eq!(view.get_integer("inty"), Some(4));
//!
//! doc.set("list.key", "value");
//! assert_eq!(doc.view().get_string("list.key").as_deref(), Some("value"));
//! ```

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod file;
pub mod navigator;
pub mod path;
pub mod view;

pub use config::Configuration;
pub use document::{
    Document, JsonSerializer, Mapping, NodeKind, ScalarValue, Serializer, TreeValue,
    YamlSerializer,
};
pub use error::{Result, TreePathError};
pub use navigator::{duplicate, get, remove, set};
pub use view::{View, ViewMut};

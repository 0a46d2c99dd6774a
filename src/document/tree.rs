//! Owned document roots.
//!
//! A [`Document`] owns a mapping root together with the [`Configuration`] its
//! views use. It is the value callers usually hold: load it from text, read
//! it through [`Document::view`], edit it through [`Document::view_mut`] or
//! the `get`/`set`/`remove` shortcuts, and render it back.
//!
//! # Example
//!
//! ```
//! use treepath::document::tree::Document;
//!
//! let mut doc = Document::from_yaml_str("server:\n  port: 8080\n").unwrap();
//! assert_eq!(doc.view().get_integer("server.port"), Some(8080));
//!
//! doc.set("server.host", "localhost");
//! assert_eq!(doc.to_yaml().unwrap(), "server:\n  port: 8080\n  host: localhost\n");
//! ```

use super::node::{Mapping, TreeValue};
use super::parser::{JsonSerializer, Serializer, YamlSerializer};
use crate::config::Configuration;
use crate::error::Result;
use crate::navigator;
use crate::path::PathArg;
use crate::view::{View, ViewMut};

/// A mapping root plus the configuration used to address it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    /// Always a mapping.
    root: TreeValue,
    config: Configuration,
}

impl Document {
    /// Creates an empty document with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty document using `config`.
    pub fn with_configuration(config: Configuration) -> Self {
        Self {
            root: TreeValue::empty_mapping(),
            config,
        }
    }

    /// Wraps an existing mapping.
    pub fn from_mapping(entries: Mapping) -> Self {
        Self {
            root: TreeValue::Mapping(entries),
            config: Configuration::default(),
        }
    }

    /// Parses a YAML document.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Self::parse_with(&YamlSerializer, text)
    }

    /// Parses a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse_with(&JsonSerializer, text)
    }

    pub fn parse_with<S: Serializer>(serializer: &S, text: &str) -> Result<Self> {
        Ok(Self::from_mapping(serializer.parse(text)?))
    }

    pub fn configuration(&self) -> Configuration {
        self.config
    }

    pub fn set_configuration(&mut self, config: Configuration) {
        self.config = config;
    }

    /// The root node. Always a mapping.
    pub fn root(&self) -> &TreeValue {
        &self.root
    }

    pub fn into_mapping(self) -> Mapping {
        match self.root {
            TreeValue::Mapping(entries) => entries,
            _ => Mapping::new(),
        }
    }

    pub fn view(&self) -> View<'_> {
        View::from_mapping_node(&self.root, self.config)
    }

    pub fn view_mut(&mut self) -> ViewMut<'_> {
        ViewMut::from_mapping_node(&mut self.root, self.config)
    }

    pub fn get<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<&TreeValue> {
        navigator::get(&self.root, path, &self.config)
    }

    pub fn set<'p>(&mut self, path: impl Into<PathArg<'p>>, value: impl Into<TreeValue>) {
        navigator::set(&mut self.root, path, value.into(), &self.config);
    }

    pub fn remove<'p>(&mut self, path: impl Into<PathArg<'p>>) {
        navigator::remove(&mut self.root, path, &self.config);
    }

    /// Replaces the root with a parsed YAML document.
    ///
    /// An empty or null document leaves the root empty. On error the root is
    /// left untouched.
    pub fn load_yaml(&mut self, text: &str) -> Result<()> {
        self.load_with(&YamlSerializer, text)
    }

    pub fn load_json(&mut self, text: &str) -> Result<()> {
        self.load_with(&JsonSerializer, text)
    }

    pub fn load_with<S: Serializer>(&mut self, serializer: &S, text: &str) -> Result<()> {
        let entries = serializer.parse(text)?;
        self.root = TreeValue::Mapping(entries);
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        self.render_with(&YamlSerializer)
    }

    pub fn to_json(&self) -> Result<String> {
        self.render_with(&JsonSerializer)
    }

    pub fn render_with<S: Serializer>(&self, serializer: &S) -> Result<String> {
        match &self.root {
            TreeValue::Mapping(entries) => serializer.render(entries),
            _ => serializer.render(&Mapping::new()),
        }
    }

    /// Removes every entry from the root.
    pub fn reset(&mut self) {
        navigator::remove(&mut self.root, "", &self.config);
    }

    /// Deep copy of the root and its configuration.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }
}

impl From<Mapping> for Document {
    fn from(entries: Mapping) -> Self {
        Self::from_mapping(entries)
    }
}

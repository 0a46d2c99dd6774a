//! Mapping views with typed getters.
//!
//! A [`View`] pairs a borrowed mapping node with a [`Configuration`]. It never
//! owns the node: two views over the same subtree see the same data, and a
//! [`ViewMut`] edits the tree it was taken from in place.
//!
//! Every typed getter comes in two forms. `get_x_or(path, default)` returns
//! `default` when nothing is bound at `path` or when the bound value does not
//! convert. `get_x(path)` derives that default from the configuration:
//! `missing_returns_null` for scalars and nested views, `missing_returns_empty`
//! for lists.
//!
//! # Example
//!
//! ```
//! use treepath::config::Configuration;
//! use treepath::document::node::TreeValue;
//! use treepath::view::View;
//!
//! let root: TreeValue = [
//!     ("inty", TreeValue::from("4")),
//!     ("doubley", TreeValue::from("4.5")),
//!     ("core", TreeValue::from("foo")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let view = View::new(&root).unwrap();
//! assert_eq!(view.get_integer("inty"), Some(4));
//! assert_eq!(view.get_integer("doubley"), Some(4));
//! assert_eq!(view.get_integer("core"), None);
//!
//! let lenient = View::with_configuration(
//!     &root,
//!     Configuration::default().with_missing_returns_null(false),
//! )
//! .unwrap();
//! assert_eq!(lenient.get_integer("missing"), Some(0));
//! ```

use std::sync::LazyLock;

use crate::config::Configuration;
use crate::convert::{
    BooleanConverter, DoubleConverter, IntegerConverter, ListConverter, SequenceConverter,
    StringConverter, ValueConverter, ViewConverter,
};
use crate::document::node::{Mapping, TreeValue};
use crate::navigator;
use crate::path::{Parser, PathArg};

static EMPTY_MAPPING: LazyLock<TreeValue> = LazyLock::new(TreeValue::empty_mapping);

/// Read-only view of a mapping node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct View<'a> {
    node: &'a TreeValue,
    config: Configuration,
}

impl<'a> View<'a> {
    /// Views `node` with the default configuration. Returns `None` unless
    /// `node` is a mapping.
    pub fn new(node: &'a TreeValue) -> Option<Self> {
        Self::with_configuration(node, Configuration::default())
    }

    /// Views `node` with `config`. Returns `None` unless `node` is a mapping.
    pub fn with_configuration(node: &'a TreeValue, config: Configuration) -> Option<Self> {
        node.is_mapping().then_some(Self { node, config })
    }

    /// Wraps a node the caller holds as a mapping: a `Document` root, or
    /// the node of a `ViewMut`, which can never be rebound.
    pub(crate) fn from_mapping_node(node: &'a TreeValue, config: Configuration) -> Self {
        Self { node, config }
    }

    /// An empty view, used as the non-null default for nested views.
    pub fn blank(config: Configuration) -> View<'static> {
        View {
            node: &EMPTY_MAPPING,
            config,
        }
    }

    pub fn configuration(&self) -> Configuration {
        self.config
    }

    /// The mapping node this view wraps.
    pub fn node(&self) -> &'a TreeValue {
        self.node
    }

    pub fn entries(&self) -> Option<&'a Mapping> {
        self.node.as_mapping()
    }

    pub fn len(&self) -> usize {
        self.entries().map_or(0, Mapping::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deep copy of the wrapped mapping.
    pub fn duplicate(&self) -> TreeValue {
        self.node.clone()
    }

    /// Raw value at `path`.
    pub fn get<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<&'a TreeValue> {
        navigator::get(self.node, path, &self.config)
    }

    /// Reads `path` and applies `converter`, falling back to `default` when
    /// the value is missing or does not convert.
    pub fn get_converted<'p, C: ValueConverter>(
        &self,
        path: impl Into<PathArg<'p>>,
        converter: &C,
        default: Option<C::Output<'a>>,
    ) -> Option<C::Output<'a>> {
        match self.get(path) {
            Some(value) => converter.convert(value).or(default),
            None => default,
        }
    }

    fn scalar_default<T>(&self, zero: T) -> Option<T> {
        (!self.config.missing_returns_null()).then_some(zero)
    }

    fn list_default<T: Default>(&self) -> Option<T> {
        self.config.missing_returns_empty().then(T::default)
    }

    pub fn get_string<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<String> {
        self.get_string_or(path, self.scalar_default(String::new()))
    }

    pub fn get_string_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<String>,
    ) -> Option<String> {
        self.get_converted(path, &StringConverter, default)
    }

    pub fn get_integer<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<i64> {
        self.get_integer_or(path, self.scalar_default(0))
    }

    pub fn get_integer_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<i64>,
    ) -> Option<i64> {
        self.get_converted(path, &IntegerConverter, default)
    }

    pub fn get_double<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<f64> {
        self.get_double_or(path, self.scalar_default(0.0))
    }

    pub fn get_double_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<f64>,
    ) -> Option<f64> {
        self.get_converted(path, &DoubleConverter, default)
    }

    pub fn get_boolean<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<bool> {
        self.get_boolean_or(path, self.scalar_default(false))
    }

    pub fn get_boolean_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<bool>,
    ) -> Option<bool> {
        self.get_converted(path, &BooleanConverter, default)
    }

    /// Nested mapping at `path` as a view sharing this view's configuration.
    ///
    /// Without `missing_returns_null` a missing mapping yields an empty view.
    pub fn get_nested_view<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<View<'a>> {
        self.get_nested_view_or(path, self.scalar_default(View::blank(self.config)))
    }

    pub fn get_nested_view_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<View<'a>>,
    ) -> Option<View<'a>> {
        self.get_converted(path, &ViewConverter::new(self.config), default)
    }

    /// Elements of the sequence at `path`, unconverted.
    pub fn get_list<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<&'a [TreeValue]> {
        self.get_list_or(path, self.list_default())
    }

    pub fn get_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<&'a [TreeValue]>,
    ) -> Option<&'a [TreeValue]> {
        self.get_converted(path, &SequenceConverter, default)
    }

    pub fn get_string_list<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<Vec<Option<String>>> {
        self.get_string_list_or(path, self.list_default())
    }

    pub fn get_string_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<Vec<Option<String>>>,
    ) -> Option<Vec<Option<String>>> {
        self.get_converted(path, &ListConverter::new(StringConverter), default)
    }

    pub fn get_integer_list<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<Vec<Option<i64>>> {
        self.get_integer_list_or(path, self.list_default())
    }

    pub fn get_integer_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<Vec<Option<i64>>>,
    ) -> Option<Vec<Option<i64>>> {
        self.get_converted(path, &ListConverter::new(IntegerConverter), default)
    }

    pub fn get_double_list<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<Vec<Option<f64>>> {
        self.get_double_list_or(path, self.list_default())
    }

    pub fn get_double_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<Vec<Option<f64>>>,
    ) -> Option<Vec<Option<f64>>> {
        self.get_converted(path, &ListConverter::new(DoubleConverter), default)
    }

    pub fn get_boolean_list<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<Vec<Option<bool>>> {
        self.get_boolean_list_or(path, self.list_default())
    }

    pub fn get_boolean_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<Vec<Option<bool>>>,
    ) -> Option<Vec<Option<bool>>> {
        self.get_converted(path, &ListConverter::new(BooleanConverter), default)
    }

    /// Sequence at `path` with each mapping element wrapped in a view.
    /// Non-mapping elements are `None`.
    pub fn get_view_list<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
    ) -> Option<Vec<Option<View<'a>>>> {
        self.get_view_list_or(path, self.list_default())
    }

    pub fn get_view_list_or<'p>(
        &self,
        path: impl Into<PathArg<'p>>,
        default: Option<Vec<Option<View<'a>>>>,
    ) -> Option<Vec<Option<View<'a>>>> {
        let converter = ListConverter::new(ViewConverter::new(self.config));
        self.get_converted(path, &converter, default)
    }
}

/// Mutable view of a mapping node.
///
/// Reads go through [`ViewMut::as_view`]; writes and removals follow the
/// navigator's autocreate rules.
#[derive(Debug)]
pub struct ViewMut<'a> {
    node: &'a mut TreeValue,
    config: Configuration,
}

impl<'a> ViewMut<'a> {
    pub fn new(node: &'a mut TreeValue) -> Option<Self> {
        Self::with_configuration(node, Configuration::default())
    }

    pub fn with_configuration(node: &'a mut TreeValue, config: Configuration) -> Option<Self> {
        if node.is_mapping() {
            Some(Self { node, config })
        } else {
            None
        }
    }

    pub(crate) fn from_mapping_node(node: &'a mut TreeValue, config: Configuration) -> Self {
        Self { node, config }
    }

    fn is_root_path(&self, path: PathArg<'_>) -> bool {
        Parser::parse(path, self.config.separator()).is_root()
    }

    pub fn configuration(&self) -> Configuration {
        self.config
    }

    pub fn as_view(&self) -> View<'_> {
        View::from_mapping_node(&*self.node, self.config)
    }

    /// Shorter-lived mutable view over the same node.
    pub fn reborrow(&mut self) -> ViewMut<'_> {
        ViewMut::from_mapping_node(&mut *self.node, self.config)
    }

    pub fn get<'p>(&self, path: impl Into<PathArg<'p>>) -> Option<&TreeValue> {
        navigator::get(&*self.node, path, &self.config)
    }

    /// Mutable reference to the value at `path`. Nothing is autocreated.
    ///
    /// The empty path yields `None`: the viewed node itself is only reachable
    /// through [`ViewMut::set`], [`ViewMut::remove`] and [`ViewMut::clear`],
    /// which keep it a mapping.
    pub fn get_mut<'p>(&mut self, path: impl Into<PathArg<'p>>) -> Option<&mut TreeValue> {
        let path = path.into();
        if self.is_root_path(path) {
            return None;
        }
        navigator::get_mut(&mut *self.node, path, &self.config)
    }

    pub fn set<'p>(&mut self, path: impl Into<PathArg<'p>>, value: impl Into<TreeValue>) {
        navigator::set(&mut *self.node, path, value.into(), &self.config);
    }

    pub fn remove<'p>(&mut self, path: impl Into<PathArg<'p>>) {
        navigator::remove(&mut *self.node, path, &self.config);
    }

    /// Removes every entry, keeping the node itself.
    pub fn clear(&mut self) {
        navigator::remove(&mut *self.node, "", &self.config);
    }

    /// Mutable view of the mapping at `path`, if there is one.
    pub fn get_nested_view_mut<'p>(&mut self, path: impl Into<PathArg<'p>>) -> Option<ViewMut<'_>> {
        let path = path.into();
        if self.is_root_path(path) {
            return Some(self.reborrow());
        }
        let config = self.config;
        let node = self.get_mut(path)?;
        ViewMut::with_configuration(node, config)
    }

    /// Mutable views of the mapping elements of the sequence at `path`.
    pub fn get_view_list_mut<'p>(
        &mut self,
        path: impl Into<PathArg<'p>>,
    ) -> Option<Vec<Option<ViewMut<'_>>>> {
        let config = self.config;
        let items = self.get_mut(path)?.as_sequence_mut()?;
        Some(
            items
                .iter_mut()
                .map(|item| ViewMut::with_configuration(item, config))
                .collect(),
        )
    }

    pub fn duplicate(&self) -> TreeValue {
        self.node.clone()
    }
}

//! Path resolution and mutation engine.
//!
//! Every operation resolves a path against a root node under a
//! [`Configuration`]: read ([`get`]), write ([`set`]) or delete ([`remove`]).
//! Reads and mutations use separate traversals. Only the mutating ones may
//! change the shape of the tree, through [`KeyedMut::ensure_mapping_at`].
//!
//! # Resolution rules
//!
//! Segments are resolved left to right from the root:
//!
//! - **Mapping**: the segment is a key. A missing key is not-found on read,
//!   is autocreated as an empty mapping on write, and stops a delete.
//! - **Sequence**: the sequence is viewed as a mapping keyed `"0"`, `"1"`, ...
//!   (see [`synthetic`]). Rebinding a position through that view does not
//!   persist.
//! - **Scalar**: not-found on read. Write and delete replace the scalar with
//!   an empty mapping and carry on.
//!
//! The empty path addresses the root and an absent path is a no-op.
//!
//! # Example
//!
//! ```
//! use treepath::config::Configuration;
//! use treepath::document::node::TreeValue;
//! use treepath::navigator;
//!
//! let config = Configuration::default();
//! let mut root = TreeValue::empty_mapping();
//!
//! navigator::set(&mut root, "server.port", TreeValue::from(8080i64), &config);
//! assert_eq!(
//!     navigator::get(&root, "server.port", &config),
//!     Some(&TreeValue::from(8080i64))
//! );
//!
//! navigator::remove(&mut root, "server.port", &config);
//! assert!(navigator::get(&root, "server.port", &config).is_none());
//! ```

pub mod synthetic;

use crate::config::Configuration;
use crate::document::node::{Mapping, TreeValue};
use crate::error::{Result, TreePathError};
use crate::path::{PathArg, Parser, TreePath};
use synthetic::{SequenceView, SequenceViewMut};

/// What to do at the end of a path.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Read,
    Write(TreeValue),
    Delete,
}

/// Keyed container as seen by the mutating traversals.
///
/// Implemented by real mappings and by the synthetic view over a sequence.
pub trait KeyedMut {
    fn contains(&self, key: &str) -> bool;

    /// Binds `key` to `value`, replacing any previous binding.
    fn bind(&mut self, key: &str, value: TreeValue);

    /// Removes the binding for `key` if there is one.
    fn unbind(&mut self, key: &str);

    /// Returns the container bound at `key`. A missing or scalar binding is
    /// first replaced with an empty mapping.
    fn ensure_mapping_at(&mut self, key: &str) -> &mut TreeValue;
}

impl KeyedMut for Mapping {
    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }

    fn bind(&mut self, key: &str, value: TreeValue) {
        self.insert(key.to_string(), value);
    }

    fn unbind(&mut self, key: &str) {
        self.shift_remove(key);
    }

    fn ensure_mapping_at(&mut self, key: &str) -> &mut TreeValue {
        let slot = self
            .entry(key.to_string())
            .or_insert_with(TreeValue::empty_mapping);
        if slot.is_scalar() {
            tracing::debug!(key, "Replacing scalar with empty mapping");
            *slot = TreeValue::empty_mapping();
        }
        slot
    }
}

/// Resolves `path` against `root` and applies `operation`.
///
/// Returns the value found for [`Operation::Read`] and `None` otherwise.
pub fn resolve<'t, 'p>(
    root: &'t mut TreeValue,
    path: impl Into<PathArg<'p>>,
    config: &Configuration,
    operation: Operation,
) -> Option<&'t TreeValue> {
    match operation {
        Operation::Read => get(root, path, config),
        Operation::Write(value) => {
            set(root, path, value, config);
            None
        }
        Operation::Delete => {
            remove(root, path, config);
            None
        }
    }
}

/// Returns the value at `path`, or `None` if nothing is bound there.
///
/// The empty path returns `root` itself.
pub fn get<'t, 'p>(
    root: &'t TreeValue,
    path: impl Into<PathArg<'p>>,
    config: &Configuration,
) -> Option<&'t TreeValue> {
    match Parser::parse(path, config.separator()) {
        TreePath::Absent => None,
        TreePath::Root => Some(root),
        TreePath::Segments(segments) => read(root, &segments),
    }
}

/// Like [`get`], but yields a mutable reference to the real node.
///
/// Nothing is autocreated. Positions inside sequences resolve to the
/// original elements.
pub fn get_mut<'t, 'p>(
    root: &'t mut TreeValue,
    path: impl Into<PathArg<'p>>,
    config: &Configuration,
) -> Option<&'t mut TreeValue> {
    match Parser::parse(path, config.separator()) {
        TreePath::Absent => None,
        TreePath::Root => Some(root),
        TreePath::Segments(segments) => read_mut(root, &segments),
    }
}

/// Binds `value` at `path`, autocreating intermediate mappings.
///
/// With the empty path a mapping `value` replaces the root wholesale; any
/// other value is bound under the literal key `""`.
pub fn set<'p>(
    root: &mut TreeValue,
    path: impl Into<PathArg<'p>>,
    value: TreeValue,
    config: &Configuration,
) {
    match Parser::parse(path, config.separator()) {
        TreePath::Absent => {}
        TreePath::Root if value.is_mapping() => *root = value,
        TreePath::Root => write_node(root, &[""], value),
        TreePath::Segments(segments) => write_node(root, &segments, value),
    }
}

/// Removes the binding at `path` if present.
///
/// The empty path clears the root mapping in place.
pub fn remove<'p>(root: &mut TreeValue, path: impl Into<PathArg<'p>>, config: &Configuration) {
    match Parser::parse(path, config.separator()) {
        TreePath::Absent => {}
        TreePath::Root => {
            if let Some(entries) = root.as_mapping_mut() {
                entries.clear();
            }
        }
        TreePath::Segments(segments) => delete_node(root, &segments),
    }
}

/// Deep-copies a mapping root.
///
/// # Errors
///
/// Returns [`TreePathError::NotAMapping`] if `root` is a sequence or scalar.
pub fn duplicate(root: &TreeValue) -> Result<TreeValue> {
    match root {
        TreeValue::Mapping(_) => Ok(root.clone()),
        other => Err(TreePathError::NotAMapping(other.kind().name())),
    }
}

fn read<'t>(root: &'t TreeValue, segments: &[&str]) -> Option<&'t TreeValue> {
    let mut current = root;
    for &segment in segments {
        tracing::trace!(segment, kind = %current.kind(), "Resolving segment");
        current = match current {
            TreeValue::Mapping(entries) => entries.get(segment)?,
            TreeValue::Sequence(items) => SequenceView::new(items).get(segment)?,
            TreeValue::Scalar(_) => return None,
        };
    }
    Some(current)
}

fn read_mut<'t>(root: &'t mut TreeValue, segments: &[&str]) -> Option<&'t mut TreeValue> {
    let mut current = root;
    for &segment in segments {
        let node = current;
        current = match node {
            TreeValue::Mapping(entries) => entries.get_mut(segment)?,
            TreeValue::Sequence(items) => SequenceViewMut::new(items).into_element(segment)?,
            TreeValue::Scalar(_) => return None,
        };
    }
    Some(current)
}

fn write_node(node: &mut TreeValue, segments: &[&str], value: TreeValue) {
    match node {
        TreeValue::Mapping(entries) => write_keyed(entries, segments, value),
        TreeValue::Sequence(items) => {
            write_keyed(&mut SequenceViewMut::new(items), segments, value)
        }
        TreeValue::Scalar(_) => {
            // Children are rebound by their parent, so only a scalar root lands here.
            tracing::debug!("Replacing scalar root with empty mapping");
            *node = TreeValue::empty_mapping();
            write_node(node, segments, value);
        }
    }
}

fn write_keyed<K: KeyedMut>(keyed: &mut K, segments: &[&str], value: TreeValue) {
    let Some((&head, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        keyed.bind(head, value);
        return;
    }
    let child = keyed.ensure_mapping_at(head);
    write_node(child, rest, value);
}

fn delete_node(node: &mut TreeValue, segments: &[&str]) {
    match node {
        TreeValue::Mapping(entries) => delete_keyed(entries, segments),
        TreeValue::Sequence(items) => delete_keyed(&mut SequenceViewMut::new(items), segments),
        TreeValue::Scalar(_) => {}
    }
}

fn delete_keyed<K: KeyedMut>(keyed: &mut K, segments: &[&str]) {
    let Some((&head, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        keyed.unbind(head);
        return;
    }
    if !keyed.contains(head) {
        return;
    }
    let child = keyed.ensure_mapping_at(head);
    delete_node(child, rest);
}

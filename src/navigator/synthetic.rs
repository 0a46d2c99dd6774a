//! Sequence-as-mapping views.
//!
//! Path segments address sequence elements by their position rendered as a
//! string key (`"0"`, `"1"`, ...). Rather than teaching every traversal about
//! indices, a sequence met during traversal is materialized as a fresh keyed
//! view whose entries point at the real elements.
//!
//! The view is one-directional: elements reached through it are the real
//! elements, so edits inside an element persist, but bindings of the view
//! itself (insert, replace, remove) live only in the view and are dropped
//! with it. The original sequence never changes length or has a position
//! rebound through a path.

use super::KeyedMut;
use crate::document::node::TreeValue;
use indexmap::IndexMap;

/// Read-only keyed view over a sequence.
#[derive(Debug)]
pub struct SequenceView<'t> {
    entries: IndexMap<String, &'t TreeValue>,
}

impl<'t> SequenceView<'t> {
    pub fn new(items: &'t [TreeValue]) -> Self {
        Self {
            entries: items
                .iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
        }
    }

    /// Looks up an element by its position key. Only canonical decimal keys
    /// match (`"1"`, never `"01"` or `"+1"`).
    pub fn get(&self, key: &str) -> Option<&'t TreeValue> {
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A binding in a mutable sequence view.
#[derive(Debug)]
enum Slot<'t> {
    /// Points at an element of the original sequence
    Element(&'t mut TreeValue),
    /// Created through the view; never reaches the original sequence
    Detached(TreeValue),
}

impl Slot<'_> {
    fn value(&self) -> &TreeValue {
        match self {
            Slot::Element(v) => v,
            Slot::Detached(v) => v,
        }
    }

    fn value_mut(&mut self) -> &mut TreeValue {
        match self {
            Slot::Element(v) => &mut **v,
            Slot::Detached(v) => v,
        }
    }
}

/// Mutable keyed view over a sequence, used by write and delete traversals.
#[derive(Debug)]
pub struct SequenceViewMut<'t> {
    entries: IndexMap<String, Slot<'t>>,
}

impl<'t> SequenceViewMut<'t> {
    pub fn new(items: &'t mut [TreeValue]) -> Self {
        Self {
            entries: items
                .iter_mut()
                .enumerate()
                .map(|(index, item)| (index.to_string(), Slot::Element(item)))
                .collect(),
        }
    }

    /// Consumes the view, returning the original element bound at `key`.
    pub fn into_element(mut self, key: &str) -> Option<&'t mut TreeValue> {
        match self.entries.swap_remove(key)? {
            Slot::Element(item) => Some(item),
            Slot::Detached(_) => None,
        }
    }
}

impl KeyedMut for SequenceViewMut<'_> {
    fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    fn bind(&mut self, key: &str, value: TreeValue) {
        tracing::debug!(key, "Discarding write to a sequence position");
        self.entries.insert(key.to_string(), Slot::Detached(value));
    }

    fn unbind(&mut self, key: &str) {
        tracing::debug!(key, "Discarding removal of a sequence position");
        self.entries.shift_remove(key);
    }

    fn ensure_mapping_at(&mut self, key: &str) -> &mut TreeValue {
        let slot = self
            .entries
            .entry(key.to_string())
            .or_insert_with(|| Slot::Detached(TreeValue::empty_mapping()));
        if slot.value().is_scalar() {
            tracing::debug!(key, "Autocreating detached mapping over a sequence position");
            *slot = Slot::Detached(TreeValue::empty_mapping());
        }
        slot.value_mut()
    }
}

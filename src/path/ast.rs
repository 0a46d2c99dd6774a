//! Path argument and parsed path types.

/// A path argument as supplied by a caller.
///
/// `Absent` is distinct from an empty string: an absent path never touches
/// the tree, while the empty string addresses the root itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathArg<'a> {
    /// No path at all
    Absent,
    /// Separator-delimited path text (possibly empty)
    Text(&'a str),
}

impl<'a> From<&'a str> for PathArg<'a> {
    fn from(text: &'a str) -> Self {
        PathArg::Text(text)
    }
}

impl<'a> From<&'a String> for PathArg<'a> {
    fn from(text: &'a String) -> Self {
        PathArg::Text(text.as_str())
    }
}

impl<'a> From<Option<&'a str>> for PathArg<'a> {
    fn from(text: Option<&'a str>) -> Self {
        match text {
            Some(text) => PathArg::Text(text),
            None => PathArg::Absent,
        }
    }
}

/// A path after splitting on the separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreePath<'a> {
    /// Resolves to nothing; operations are no-ops
    Absent,
    /// The empty path, addressing the root node
    Root,
    /// One or more keys, outermost first
    Segments(Vec<&'a str>),
}

impl<'a> TreePath<'a> {
    pub fn is_root(&self) -> bool {
        matches!(self, TreePath::Root)
    }

    /// Returns the segments, or an empty slice for the root and absent paths.
    pub fn segments(&self) -> &[&'a str] {
        match self {
            TreePath::Segments(segments) => segments,
            TreePath::Absent | TreePath::Root => &[],
        }
    }
}

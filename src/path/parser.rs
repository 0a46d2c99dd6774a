//! Splits path text into segments.

use super::ast::{PathArg, TreePath};

/// Parser for separator-delimited paths.
///
/// There is no escaping: every occurrence of the separator is a segment
/// boundary, and empty segments (from `a..b` or a trailing separator) are
/// kept as empty-string keys.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    separator: char,
}

impl Parser {
    /// Creates a parser splitting on `separator`.
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    /// Parses a path argument with the given separator.
    pub fn parse<'a>(arg: impl Into<PathArg<'a>>, separator: char) -> TreePath<'a> {
        Parser::new(separator).parse_arg(arg.into())
    }

    pub fn parse_arg<'a>(&self, arg: PathArg<'a>) -> TreePath<'a> {
        match arg {
            PathArg::Absent => TreePath::Absent,
            PathArg::Text("") => TreePath::Root,
            PathArg::Text(text) => TreePath::Segments(text.split(self.separator).collect()),
        }
    }
}

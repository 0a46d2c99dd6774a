//! Dotted-path expressions.
//!
//! A path is a string split on a single configurable separator character.
//! Two boundary encodings carry special meaning:
//!
//! - `""` addresses the root node itself
//! - an absent path (`None`) addresses nothing and leaves the tree untouched
//!
//! # Examples
//!
//! ```
//! use treepath::path::{Parser, TreePath};
//!
//! assert_eq!(Parser::parse("a.b", '.'), TreePath::Segments(vec!["a", "b"]));
//! assert_eq!(Parser::parse("", '.'), TreePath::Root);
//! assert_eq!(Parser::parse(None::<&str>, '.'), TreePath::Absent);
//! ```

pub mod ast;
pub mod parser;

pub use ast::{PathArg, TreePath};
pub use parser::Parser;

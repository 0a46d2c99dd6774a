//! Document model: tree values, serializers, and owned document roots.

pub mod node;
pub mod parser;
pub mod tree;

pub use node::{Mapping, NodeKind, ScalarValue, Sequence, TreeValue};
pub use parser::{JsonSerializer, Serializer, YamlSerializer};
pub use tree::Document;

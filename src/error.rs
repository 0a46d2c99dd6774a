//! Error types for treepath.
//!
//! Ordinary absence is never an error in this crate: lookups that miss return
//! `None`. Errors are reserved for malformed configuration, documents whose
//! top level cannot be used as a root, and serializer failures.

use thiserror::Error;

/// Errors produced when building configurations or (de)serializing documents.
#[derive(Error, Debug)]
pub enum TreePathError {
    /// The path separator must be exactly one character.
    #[error("separator must be exactly one character, got {0:?}")]
    InvalidSeparator(String),

    /// The operation requires a mapping-shaped root.
    #[error("document root must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// YAML text could not be parsed or emitted.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON text could not be parsed or emitted.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout treepath.
pub type Result<T> = std::result::Result<T, TreePathError>;

//! File I/O for documents.
//!
//! This module loads documents from disk or stdin and saves them back with
//! atomic writes and optional backups. The text format is picked from the
//! file name: `.json` is JSON, anything else is YAML. A trailing `.gz` means
//! the file is gzip-compressed.

pub mod loader;
pub mod saver;

use crate::document::parser::{JsonSerializer, Serializer, YamlSerializer};
use crate::document::Mapping;
use crate::error::Result;
use std::path::Path;

/// Text format of a document file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

impl Format {
    /// Picks the format from a file name, looking through a `.gz` suffix.
    ///
    /// - `config.json` and `config.json.gz` are JSON
    /// - `config.yaml`, `config.yml.gz` and unknown extensions are YAML
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let name = path.as_ref().to_string_lossy().to_ascii_lowercase();
        let base = name.strip_suffix(".gz").unwrap_or(&name);
        if base.ends_with(".json") {
            Format::Json
        } else {
            Format::Yaml
        }
    }
}

impl Serializer for Format {
    fn parse(&self, text: &str) -> Result<Mapping> {
        match self {
            Format::Yaml => YamlSerializer.parse(text),
            Format::Json => JsonSerializer.parse(text),
        }
    }

    fn render(&self, root: &Mapping) -> Result<String> {
        match self {
            Format::Yaml => YamlSerializer.render(root),
            Format::Json => JsonSerializer.render(root),
        }
    }
}

/// Whether `path` names a gzip-compressed file.
pub fn is_gzipped<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path("a.json"), Format::Json);
        assert_eq!(Format::from_path("dir/a.JSON"), Format::Json);
        assert_eq!(Format::from_path("a.json.gz"), Format::Json);
        assert_eq!(Format::from_path("a.yaml"), Format::Yaml);
        assert_eq!(Format::from_path("a.yml.gz"), Format::Yaml);
        assert_eq!(Format::from_path("a.conf"), Format::Yaml);
    }

    #[test]
    fn test_is_gzipped() {
        assert!(is_gzipped("a.yaml.gz"));
        assert!(!is_gzipped("a.yaml"));
        assert!(!is_gzipped("gz"));
    }
}

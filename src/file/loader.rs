//! Document loading.
//!
//! Loads YAML or JSON documents from files or stdin into a [`Document`].
//! Gzip-compressed input is decompressed transparently: by `.gz` extension for
//! files, by magic bytes for stdin.

use super::{is_gzipped, Format};
use crate::config::Configuration;
use crate::document::parser::Serializer;
use crate::document::tree::Document;
use anyhow::{Context, Result};
use flate2::read::GzDecoder;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Loads and parses a document file.
///
/// The format comes from the file name (see [`Format::from_path`]) and the
/// document is addressed with `config`.
///
/// # Examples
///
/// ```no_run
/// use treepath::config::Configuration;
/// use treepath::file::loader::load_document;
///
/// let doc = load_document("config.yaml", Configuration::default()).unwrap();
/// let port = doc.view().get_integer("server.port");
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents do not parse, or their top level is not a mapping
pub fn load_document<P: AsRef<Path>>(path: P, config: Configuration) -> Result<Document> {
    let path = path.as_ref();

    let content = if is_gzipped(path) {
        let file = fs::File::open(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?;
        gunzip_to_string(file, &path.display().to_string())?
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read file {}", path.display()))?
    };

    tracing::debug!(path = %path.display(), bytes = content.len(), "Loaded document text");
    parse_content(&content, Format::from_path(path), config)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Loads a document from standard input.
///
/// Input starting with the gzip magic bytes is decompressed first.
pub fn load_from_stdin(format: Format, config: Configuration) -> Result<Document> {
    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    load_from_bytes(&buffer, format, config).context("Failed to parse stdin")
}

/// Parses raw bytes, decompressing them first if they are gzip data.
pub fn load_from_bytes(bytes: &[u8], format: Format, config: Configuration) -> Result<Document> {
    let content = if bytes.starts_with(&GZIP_MAGIC) {
        gunzip_to_string(bytes, "gzipped input")?
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };
    parse_content(&content, format, config)
}

/// Parses document text in the given format.
pub fn parse_content(content: &str, format: Format, config: Configuration) -> Result<Document> {
    let entries = format.parse(content)?;
    let mut doc = Document::from_mapping(entries);
    doc.set_configuration(config);
    Ok(doc)
}

/// Decompresses gzip data from `reader` into text. `source` names the input
/// in error messages.
fn gunzip_to_string(reader: impl Read, source: &str) -> Result<String> {
    let mut content = String::new();
    GzDecoder::new(reader)
        .read_to_string(&mut content)
        .with_context(|| format!("Failed to decompress {}", source))?;
    Ok(content)
}

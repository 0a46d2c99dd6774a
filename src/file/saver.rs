//! Document saving.
//!
//! Documents are rendered in the format their target file name implies and
//! written atomically: the text goes to a uniquely named temporary file in
//! the same directory which is then renamed over the target, so the target
//! is never left half-written and no other file is touched.

use super::{is_gzipped, Format};
use crate::document::tree::Document;
use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Options for [`save_document`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveOptions {
    /// Copy an existing target to `<name>.bak` before overwriting it
    pub create_backup: bool,
}

/// Renders `doc` and writes it to `path`.
///
/// A `.gz` target is gzip-compressed.
///
/// # Examples
///
/// ```no_run
/// use treepath::document::tree::Document;
/// use treepath::file::saver::{save_document, SaveOptions};
///
/// let mut doc = Document::new();
/// doc.set("server.port", 8080i64);
/// save_document("config.yaml", &doc, SaveOptions::default()).unwrap();
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - Backup creation fails (if requested)
/// - Rendering fails
/// - Writing the temp file or renaming it fails
pub fn save_document<P: AsRef<Path>>(path: P, doc: &Document, options: SaveOptions) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path);

    if options.create_backup && path.exists() {
        let backup = create_backup(path)?;
        tracing::debug!(backup = %backup.display(), "Created backup");
    }

    let text = render_document(doc, format).context("Failed to render document")?;

    write_file_atomic(path, text.as_bytes(), is_gzipped(path))?;
    tracing::debug!(path = %path.display(), ?format, "Saved document");

    Ok(())
}

/// Renders `doc` in `format`. JSON output gets a trailing newline.
fn render_document(doc: &Document, format: Format) -> crate::error::Result<String> {
    let mut text = doc.render_with(&format)?;
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

/// `<name>.bak` next to `path`.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

fn create_backup(path: &Path) -> Result<PathBuf> {
    let backup = backup_path(path);
    fs::copy(path, &backup)
        .with_context(|| format!("Failed to create backup {}", backup.display()))?;
    Ok(backup)
}

/// Writes `data` to a uniquely named temporary file in the target's
/// directory, then persists it over `path`. An existing target keeps its
/// permissions.
fn write_file_atomic(path: &Path, data: &[u8], compress: bool) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temp file in {}", dir.display()))?;

    if compress {
        let mut encoder = GzEncoder::new(temp.as_file_mut(), Compression::default());
        encoder
            .write_all(data)
            .context("Failed to write compressed data")?;
        encoder.finish().context("Failed to finish compression")?;
    } else {
        temp.write_all(data).context("Failed to write temp file")?;
    }

    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .context("Failed to copy permissions")?;
    }

    temp.persist(path)
        .with_context(|| format!("Failed to replace {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_output_ends_with_newline() {
        let mut doc = Document::new();
        doc.set("a", 1i64);
        let text = render_document(&doc, Format::Json).unwrap();
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_write_file_atomic_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.yaml");
        write_file_atomic(&path, b"a: 1\n", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "a: 1\n");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_file_atomic_keeps_same_stem_siblings() {
        let dir = TempDir::new().unwrap();
        let sibling = dir.path().join("settings.tmp");
        fs::write(&sibling, "unrelated\n").unwrap();

        write_file_atomic(&dir.path().join("settings.yaml"), b"a: 1\n", false).unwrap();
        assert_eq!(fs::read_to_string(&sibling).unwrap(), "unrelated\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_atomic_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.yaml");
        fs::write(&path, "old\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_file_atomic(&path, b"new\n", false).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_create_backup() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.yaml");
        fs::write(&path, "old: true\n").unwrap();
        let backup = create_backup(&path).unwrap();
        assert_eq!(backup, dir.path().join("doc.yaml.bak"));
        assert_eq!(fs::read_to_string(backup).unwrap(), "old: true\n");
    }
}

//! Document writer.
//!
//! This module handles encoding a `Document` as YAML and placing it on disk.

use std::fs::{self, Permissions};
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::Builder;

use crate::builder::Document;
use crate::error::{MapError, Result};

/// Encode a document as YAML text.
pub fn to_yaml(document: &Document) -> Result<String> {
    Ok(serde_yaml::to_string(document)?)
}

/// Write a document to `output_path`.
///
/// The document is fully encoded before anything touches the file system. It is then written
/// to a temporary file next to the destination and renamed over it, so a failed write never
/// leaves a partial document behind. An existing destination keeps its permissions; a new one
/// gets `0o666` less the umask, like a plainly created file.
pub fn write_document(document: &Document, output_path: &Path) -> Result<()> {
    let yaml = to_yaml(document)?;

    let output_err = |source| MapError::OutputIo {
        path: output_path.to_path_buf(),
        source,
    };

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = fs::metadata(output_path).ok().map(|m| m.permissions());

    let mut tmp = Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
        .map_err(output_err)?;
    if let Some(perms) = existing {
        tmp.as_file().set_permissions(perms).map_err(output_err)?;
    }
    tmp.write_all(yaml.as_bytes()).map_err(output_err)?;
    tmp.flush().map_err(output_err)?;
    tmp.persist(output_path).map_err(|e| output_err(e.error))?;

    tracing::info!(
        "wrote {} entries ({} bytes) to {}",
        document.len(),
        yaml.len(),
        output_path.display()
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/writer.rs"]
mod tests;

//! Map file reader.
//!
//! Maps the input file into memory and decodes it as UTF-8. Decoding is strict so that a
//! mis-encoded map fails here instead of producing mangled identifiers. Line endings are
//! normalized to `\n`, so maps written by Windows toolchains scan the same way.

use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use crate::error::{MapError, Result};

/// Read the whole map file at `path` as text.
pub fn read_map(path: &Path) -> Result<String> {
    let input_err = |source| MapError::InputIo {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_err)?;
    let mmap = unsafe { Mmap::map(&file) }.map_err(input_err)?;
    let text = std::str::from_utf8(&mmap).map_err(|source| MapError::InputDecode {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(normalize_line_endings(text).into_owned())
}

/// Rewrite `\r\n` and lone `\r` line breaks as `\n`.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}

#[cfg(test)]
#[path = "tests/reader.rs"]
mod tests;

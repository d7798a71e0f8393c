//! Error types.
//!
//! Every fallible operation in the library returns a [`MapError`]. The binary
//! wraps these in `anyhow` for reporting.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Failed to read map file: {}", .path.display())]
    InputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Map file is not valid UTF-8: {}", .path.display())]
    InputDecode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Cannot parse `{literal}` as an integer")]
    NumericParse {
        literal: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Pattern catalog `{catalog}` has no `{group}` capture group")]
    MissingGroup {
        catalog: &'static str,
        group: &'static str,
    },

    #[error("Failed to encode document")]
    Encode(#[from] serde_yaml::Error),

    #[error("Failed to write document: {}", .path.display())]
    OutputIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;

//! Configuration module.
//!
//! This module defines the command-line interface (CLI) using `clap`.
//! It handles parsing the input map path, the output document path and the log level.

use clap::Parser;
use std::path::PathBuf;

/// Convert a GNU linker map file into a YAML document.
///
/// Top-level memory areas and the output sections nested under them are extracted into a
/// single ordered `map` sequence, areas first.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Linker map file to read
    pub input: PathBuf,

    /// Output file
    #[arg(short, long, help = "Path to the output document [default: <INPUT>.yaml]")]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: String,
}

impl Config {
    /// The output path, defaulting to the input path with a `yaml` extension.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("yaml"))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;

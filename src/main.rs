//! Entry point for the ldmap converter.
//!
//! This file handles high-level application flow:
//! 1. Parse command-line arguments using `clap`.
//! 2. Install the `tracing` subscriber.
//! 3. Read the map file, build the document with the GNU ld patterns, write it out.
//!
//! Error handling is done via `anyhow`.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ldmap::builder::MapDocumentBuilder;
use ldmap::catalog::gnu::Gnu;
use ldmap::config::Config;
use ldmap::reader::read_map;
use ldmap::writer::write_document;

fn main() -> Result<()> {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .with_context(|| format!("invalid log level `{}`", config.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = config.output_path();

    // 1. Load the map text
    let text = read_map(&config.input)?;

    // 2. Scan areas and sections, assemble
    let builder = MapDocumentBuilder::new(Gnu);
    let document = builder
        .build(&text)
        .with_context(|| format!("failed to parse {}", config.input.display()))?;

    if document.is_empty() {
        tracing::warn!("no areas or sections found in {}", config.input.display());
    }

    // 3. Write the document
    write_document(&document, &output)?;

    println!("Wrote {} entries to {}", document.len(), output.display());
    Ok(())
}

//! Linker map conversion library.
//!
//! This library provides the components for the `ldmap` tool.
//! It is organized into several modules:
//! - `config`: CLI configuration.
//! - `catalog`: Dialect-specific recognition patterns and literal parsing.
//! - `entry`: The area/section record model.
//! - `builder`: Scanning map text and assembling the document.
//! - `reader` / `writer`: Getting text in and the document out.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod reader;
pub mod writer;

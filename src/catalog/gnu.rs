//! GNU ld map file patterns.
//!
//! Implements the `PatternCatalog` trait for the map files written by `ld -Map`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::PatternCatalog;

// `.text    0x00001000    0x00000200`
static AREA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?P<id>[.][a-z]+) +(?P<address>0x[a-fA-F0-9]+) +(?P<size>0x[a-fA-F0-9]+)\n")
        .expect("area pattern is valid")
});

// ` .text.init`
// `        0x0000000000001000      0x100 init.o`
static SECTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\s(?P<parent>\.[^.\s]+)\.(?P<id>\S+)\n",
        r"\s+(?P<address>0x[0-9a-fA-F]{16})\s+(?P<size>0x[0-9a-fA-F]+)\s+[^\n]+\n",
    ))
    .expect("section pattern is valid")
});

/// The GNU ld map dialect.
#[derive(Debug, Default, Clone, Copy)]
pub struct Gnu;

impl PatternCatalog for Gnu {
    fn name(&self) -> &'static str {
        "gnu-ld"
    }

    fn area_pattern(&self) -> &Regex {
        &AREA_PATTERN
    }

    fn section_pattern(&self) -> &Regex {
        &SECTION_PATTERN
    }
}

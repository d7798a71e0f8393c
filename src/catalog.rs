//! Pattern catalog abstraction.
//!
//! This module defines the `PatternCatalog` trait, which holds the recognition rules for one
//! map file dialect. The builder stays generic over the catalog so the scanning and assembly
//! logic does not depend on the exact layout a particular linker prints.

use regex::Regex;

use crate::error::{MapError, Result};

pub mod gnu;

/// A set of recognition rules for a linker map dialect.
///
/// Patterns report their fields through named capture groups:
/// * area pattern: `id`, `address`, `size`
/// * section pattern: `parent`, `id`, `address`, `size`
pub trait PatternCatalog {
    /// Human readable dialect name, used in log output.
    fn name(&self) -> &'static str;

    /// Matches a single-line top-level memory area.
    fn area_pattern(&self) -> &Regex;

    /// Matches an output section header block nested under an area.
    fn section_pattern(&self) -> &Regex;
}

/// Parses an integer literal, detecting the radix from its prefix.
///
/// `0x`/`0X` selects base 16, `0o`/`0O` base 8, `0b`/`0B` base 2 and anything else is read as
/// decimal. A literal that does not fit in a `u64` is an error, never a truncated value.
pub fn parse_literal(literal: &str) -> Result<u64> {
    let unsigned = literal.strip_prefix('+').unwrap_or(literal);
    let (radix, digits) = split_radix(unsigned);

    // A sign is only allowed ahead of the prefix; hand the raw text over so it is rejected.
    let digits = if digits.starts_with(['+', '-']) { literal } else { digits };

    u64::from_str_radix(digits, radix).map_err(|source| MapError::NumericParse {
        literal: literal.to_string(),
        source,
    })
}

fn split_radix(literal: &str) -> (u32, &str) {
    let bytes = literal.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let rest = &literal[2..];
        match bytes[1] {
            b'x' | b'X' => return (16, rest),
            b'o' | b'O' => return (8, rest),
            b'b' | b'B' => return (2, rest),
            _ => {}
        }
    }
    (10, literal)
}

#[cfg(test)]
#[path = "tests/catalog.rs"]
mod tests;

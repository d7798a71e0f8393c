use super::gnu::Gnu;
use super::{parse_literal, PatternCatalog};
use crate::error::MapError;

#[test]
fn test_parse_hex_literals() {
    assert_eq!(parse_literal("0x1000").unwrap(), 4096);
    assert_eq!(parse_literal("0xFFFFFFFF").unwrap(), 4294967295);
    assert_eq!(parse_literal("0x0000000000001000").unwrap(), 4096);
    assert_eq!(parse_literal("0XfF").unwrap(), 255);
    assert_eq!(parse_literal("0xffffffffffffffff").unwrap(), u64::MAX);
}

#[test]
fn test_parse_other_radixes() {
    assert_eq!(parse_literal("0o17").unwrap(), 15);
    assert_eq!(parse_literal("0b101").unwrap(), 5);
    assert_eq!(parse_literal("42").unwrap(), 42);
    assert_eq!(parse_literal("+0x10").unwrap(), 16);
}

#[test]
fn test_parse_rejects_bad_literals() {
    for literal in ["", "0x", "0x+1", "-1", "0x1_0", "zz", "0b2"] {
        match parse_literal(literal) {
            Err(MapError::NumericParse { literal: l, .. }) => assert_eq!(l, literal),
            other => panic!("expected NumericParse for {literal:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_parse_overflow_is_an_error() {
    // One hex digit past u64::MAX
    let err = parse_literal("0x10000000000000000").unwrap_err();
    assert!(matches!(err, MapError::NumericParse { .. }), "got {err:?}");
}

#[test]
fn test_gnu_area_pattern() {
    let caps = Gnu
        .area_pattern()
        .captures(".text           0x00001000   0x00000200\n")
        .expect("area line should match");
    assert_eq!(&caps["id"], ".text");
    assert_eq!(&caps["address"], "0x00001000");
    assert_eq!(&caps["size"], "0x00000200");

    // Uppercase names and lines without a trailing newline are not areas
    assert!(!Gnu.area_pattern().is_match(".TEXT 0x1000 0x200\n"));
    assert!(!Gnu.area_pattern().is_match(".text 0x1000 0x200"));
}

#[test]
fn test_gnu_section_pattern() {
    let block = " .text.init\n                0x0000000000001000      0x100 init.o\n";
    let caps = Gnu
        .section_pattern()
        .captures(block)
        .expect("section block should match");
    assert_eq!(&caps["parent"], ".text");
    assert_eq!(&caps["id"], "init");
    assert_eq!(&caps["address"], "0x0000000000001000");
    assert_eq!(&caps["size"], "0x100");
}

#[test]
fn test_gnu_section_requires_full_width_address() {
    let block = " .text.init\n                0x00001000      0x100 init.o\n";
    assert!(!Gnu.section_pattern().is_match(block));
}

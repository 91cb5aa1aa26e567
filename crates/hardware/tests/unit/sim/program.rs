//! # Program Tests

use mips_core::common::DecodeError;
use mips_core::sim::Program;
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::InstructionBuilder as B;

#[test]
fn test_from_source_trims_lines() {
    let source = "  00000000001000100001100000100000\r\n\t00010000000000000000000000000000  \n";
    let program = Program::from_source(source);
    assert_eq!(program.len(), 2);
    assert_eq!(program.line(0), Some("00000000001000100001100000100000"));
    assert_eq!(program.line(1), Some("00010000000000000000000000000000"));
    assert_eq!(program.line(2), None);
}

#[test]
fn test_blank_lines_are_kept() {
    let program = Program::from_source("\n00010000000000000000000000000000\n");
    assert_eq!(program.lines(), &["".to_owned(), "00010000000000000000000000000000".to_owned()]);
}

#[test]
fn test_empty_source() {
    assert!(Program::from_source("").is_empty());
}

#[test]
fn test_from_words_renders_binary() {
    let program = Program::from_words(&[1, 0x8000_0000]);
    assert_eq!(program.line(0), Some("00000000000000000000000000000001"));
    assert_eq!(program.line(1), Some("10000000000000000000000000000000"));
}

#[test]
fn test_disassemble_listing() {
    let mut source = Program::from_words(&[B::add(3, 1, 2).build(), B::exit().build()])
        .lines()
        .join("\n");
    source.push_str("\n0101\n");
    source.push_str(&B::lui(8, 0x10).line());

    let listing = Program::from_source(&source).disassemble();
    let texts: Vec<_> = listing.iter().map(|l| l.text.clone()).collect();
    assert_eq!(
        texts,
        vec![
            Ok("add $v1, $at, $v0".to_owned()),
            Ok("exit".to_owned()),
            Err(DecodeError::WrongLength { len: 4 }),
            Ok("lui $t0, 16".to_owned()),
        ]
    );
    assert_eq!(listing[2].line, 2);
    assert_eq!(listing[2].source, "0101");
}

//! MIPS Instruction Decoder.
//!
//! This module turns textual instruction words (32 characters of `0`/`1`, most
//! significant bit first) into raw `u32` words, and raw words into the
//! structured [`Instruction`] record. Decoding a raw word never fails; only the
//! text layer can reject input.

use crate::common::constants::WORD_CHARS;
use crate::common::error::DecodeError;
use crate::isa::instruction::{IFormat, Instruction, InstructionBits, JFormat, RFormat};
use crate::isa::opcodes;

/// Parses a textual instruction word.
///
/// # Arguments
///
/// * `line` - Exactly 32 characters of `0` and `1`, most significant bit first.
///
/// # Errors
///
/// Returns [`DecodeError::WrongLength`] when the line is not 32 characters long
/// and [`DecodeError::InvalidBit`] when any character is not a binary digit.
pub fn parse_word(line: &str) -> Result<u32, DecodeError> {
    let len = line.chars().count();
    if len != WORD_CHARS {
        return Err(DecodeError::WrongLength { len });
    }

    line.chars()
        .enumerate()
        .try_fold(0u32, |word, (index, bit)| match bit {
            '0' => Ok(word << 1),
            '1' => Ok((word << 1) | 1),
            found => Err(DecodeError::InvalidBit { index, found }),
        })
}

/// Decodes a 32-bit word into an instruction record.
///
/// Opcode `000000` selects the R-format, `000010` the J-format, and every
/// other opcode, recognized or not, the I-format. All fields are populated
/// for unrecognized opcodes too.
pub fn decode(word: u32) -> Instruction {
    match word.opcode() {
        opcodes::OP_SPECIAL => Instruction::R(RFormat {
            rs: word.rs(),
            rt: word.rt(),
            rd: word.rd(),
            shamt: word.shamt(),
            funct: word.funct(),
        }),
        opcodes::OP_J => Instruction::J(JFormat {
            opcode: opcodes::OP_J,
            address: word.address(),
        }),
        opcode => Instruction::I(IFormat {
            opcode,
            rs: word.rs(),
            rt: word.rt(),
            immediate: sign_extend(word.imm()),
        }),
    }
}

/// Parses and decodes a textual instruction word.
///
/// # Errors
///
/// Propagates the [`DecodeError`] of [`parse_word`]; no record is produced
/// for malformed input.
pub fn decode_line(line: &str) -> Result<Instruction, DecodeError> {
    parse_word(line).map(decode)
}

/// Sign extends a 16-bit immediate: values with bit 15 set become `raw - 65536`.
#[inline]
fn sign_extend(imm: u16) -> i32 {
    i32::from(imm as i16)
}

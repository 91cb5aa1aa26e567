//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the fixed MIPS32 field layout and the structured
//! instruction record produced by the decoder.
//!
//! ```text
//! R-format: [opcode:6][rs:5][rt:5][rd:5][shamt:5][funct:6]
//! I-format: [opcode:6][rs:5][rt:5][immediate:16]
//! J-format: [opcode:6][address:26]
//! ```

use crate::isa::opcodes;

/// Bit shift for the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift for the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;
/// Bit shift for the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Bit shift for the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;
/// Bit shift for the `shamt` field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the `funct` field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;
/// Bit mask for the jump address field (bits 25-0).
pub const ADDRESS_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every field is available on every word regardless of format; the format
/// only decides which fields are meaningful.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / I-format target register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the R-format destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the function code field (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw, unsigned immediate field (bits 15-0).
    fn imm(&self) -> u16;

    /// Extracts the unsigned 26-bit jump address field (bits 25-0).
    fn address(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & REG_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & FUNCT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn address(&self) -> u32 {
        self & ADDRESS_MASK
    }
}

/// Register-register fields. The opcode of an R-format word is always `000000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RFormat {
    /// First source register index.
    pub rs: usize,
    /// Second source register index.
    pub rt: usize,
    /// Destination register index.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// Function code.
    pub funct: u32,
}

/// Register-immediate fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IFormat {
    /// Primary opcode.
    pub opcode: u32,
    /// Source (or base) register index.
    pub rs: usize,
    /// Target register index.
    pub rt: usize,
    /// Immediate, sign-extended from 16 bits.
    pub immediate: i32,
}

impl IFormat {
    /// The immediate as the raw, unsigned 16-bit field.
    #[inline]
    pub const fn raw_immediate(&self) -> u16 {
        self.immediate as u16
    }
}

/// Jump fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JFormat {
    /// Primary opcode.
    pub opcode: u32,
    /// Unsigned 26-bit target.
    pub address: u32,
}

/// A decoded instruction record.
///
/// Produced by [`decode`](crate::isa::decode::decode); transient and consumed
/// by rendering or execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Register-register format.
    R(RFormat),
    /// Register-immediate format.
    I(IFormat),
    /// Jump format.
    J(JFormat),
}

impl Instruction {
    /// Primary opcode of the record.
    pub const fn opcode(&self) -> u32 {
        match self {
            Self::R(_) => opcodes::OP_SPECIAL,
            Self::I(i) => i.opcode,
            Self::J(j) => j.opcode,
        }
    }

    /// Re-encodes the record into the 32-bit word it was decoded from.
    pub const fn encode(&self) -> u32 {
        match self {
            Self::R(r) => {
                (opcodes::OP_SPECIAL << OPCODE_SHIFT)
                    | ((r.rs as u32 & REG_MASK) << RS_SHIFT)
                    | ((r.rt as u32 & REG_MASK) << RT_SHIFT)
                    | ((r.rd as u32 & REG_MASK) << RD_SHIFT)
                    | ((r.shamt & REG_MASK) << SHAMT_SHIFT)
                    | (r.funct & FUNCT_MASK)
            }
            Self::I(i) => {
                ((i.opcode & OPCODE_MASK) << OPCODE_SHIFT)
                    | ((i.rs as u32 & REG_MASK) << RS_SHIFT)
                    | ((i.rt as u32 & REG_MASK) << RT_SHIFT)
                    | (i.raw_immediate() as u32)
            }
            Self::J(j) => ((j.opcode & OPCODE_MASK) << OPCODE_SHIFT) | (j.address & ADDRESS_MASK),
        }
    }
}

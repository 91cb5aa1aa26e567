//! MIPS Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) of the supported subset.

/// Register-register instructions; the operation is selected by `funct`.
pub const OP_SPECIAL: u32 = 0b000000;

/// Print the integer held in `rt` (non-standard extension).
pub const OP_PRINT_INT: u32 = 0b000001;

/// Unconditional jump (J-format).
pub const OP_J: u32 = 0b000010;

/// Print the string held in `rt` (non-standard extension).
pub const OP_PRINT_STR: u32 = 0b000011;

/// Terminate the program (non-standard extension).
pub const OP_EXIT: u32 = 0b000100;

/// Add Immediate.
pub const OP_ADDI: u32 = 0b001000;

/// Set on Less Than Immediate.
pub const OP_SLTI: u32 = 0b001010;

/// Load Upper Immediate.
pub const OP_LUI: u32 = 0b001111;

/// Load Word.
pub const OP_LW: u32 = 0b100011;

/// Store Word.
pub const OP_SW: u32 = 0b101011;

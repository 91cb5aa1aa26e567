//! MIPS Function Codes (funct).
//!
//! The `funct` field (bits 5-0) distinguishes between R-format instructions
//! sharing opcode `000000`.

/// Shift Left Logical.
pub const SLL: u32 = 0b000000;
/// System call.
pub const SYSCALL: u32 = 0b001100;
/// Signed multiply into HI/LO.
pub const MULT: u32 = 0b011000;
/// Add.
pub const ADD: u32 = 0b100000;
/// Subtract.
pub const SUB: u32 = 0b100010;
/// Bitwise AND.
pub const AND: u32 = 0b100100;
/// Bitwise OR.
pub const OR: u32 = 0b100101;
/// Set on Less Than (signed).
pub const SLT: u32 = 0b101010;

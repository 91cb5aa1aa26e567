//! ALU shift operations.
//!
//! The shift amount is masked to 5 bits (0-31); bits shifted past bit 31 are
//! discarded.

use super::AluOp;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Sll => a.wrapping_shl(b & SHAMT_MASK),
        _ => 0,
    }
}

//! ALU logical and comparison operations.
//!
//! The comparison result is always 0 or 1.

use super::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Slt => ((a as i32) < (b as i32)) as u32,
        _ => 0,
    }
}

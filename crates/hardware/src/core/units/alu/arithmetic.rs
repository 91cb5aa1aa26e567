//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32. Multiplication produces the full
//! 64-bit signed product split into HI/LO words.

use super::AluOp;
use crate::common::constants::{WORD_BITS, WORD_MASK};

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::Add => a.wrapping_add(b),
        AluOp::Sub => a.wrapping_sub(b),
        _ => 0,
    }
}

/// Signed 32 x 32 -> 64-bit multiply.
///
/// Both operands are interpreted as two's-complement. The product of two
/// 32-bit signed values always fits in an `i64`, so no bits are lost before
/// the split.
///
/// # Returns
///
/// `(hi, lo)`: bits 63-32 and 31-0 of the product.
pub fn multiply(a: u32, b: u32) -> (u32, u32) {
    let product = i64::from(a as i32) * i64::from(b as i32);
    let bits = product as u64;
    ((bits >> WORD_BITS) as u32, (bits & WORD_MASK) as u32)
}

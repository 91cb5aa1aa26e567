//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used by the executor. Every
//! result is a 32-bit word; arithmetic wraps instead of trapping on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub, and the 64-bit signed multiply
//! - [`logic`]:      And, Or, Slt
//! - [`shifts`]:     Sll

/// Integer arithmetic operations (add, subtract, multiply).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, slt).
pub mod logic;

/// Shift operations (sll).
pub mod shifts;

use crate::isa::operation::Operation;

/// Word-sized ALU operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Signed set-less-than.
    Slt,
    /// Logical left shift.
    Sll,
}

impl AluOp {
    /// Selects the ALU operation backing an instruction, if it has one.
    ///
    /// Register and immediate forms share an operation (`add`/`addi` both map
    /// to [`AluOp::Add`]).
    pub const fn from_operation(op: Operation) -> Option<Self> {
        match op {
            Operation::Add | Operation::Addi => Some(Self::Add),
            Operation::Sub => Some(Self::Sub),
            Operation::And => Some(Self::And),
            Operation::Or => Some(Self::Or),
            Operation::Slt | Operation::Slti => Some(Self::Slt),
            Operation::Sll => Some(Self::Sll),
            _ => None,
        }
    }
}

/// Arithmetic Logic Unit (ALU) for word operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand, also used as the shift amount for [`AluOp::Sll`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mips_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::Add, u32::MAX, 1), 0);
    /// assert_eq!(Alu::execute(AluOp::Slt, (-1i32) as u32, 0), 1);
    /// ```
    #[inline]
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll => shifts::execute(op, a, b),
        }
    }
}

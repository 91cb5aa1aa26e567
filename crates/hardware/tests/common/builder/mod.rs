//! Instruction word builders.

pub mod instruction;

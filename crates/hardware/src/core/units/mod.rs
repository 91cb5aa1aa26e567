//! Execution units.

/// Integer arithmetic logic unit.
pub mod alu;

//! Core machine implementation.
//!
//! This module contains the architectural state (register file and memory),
//! the ALU, and the executor that applies decoded instructions to that state.

/// Architecture-specific components (general-purpose register file).
pub mod arch;

/// Machine state and instruction execution.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::memory::Memory;
pub use self::cpu::{ExecOutcome, Machine};

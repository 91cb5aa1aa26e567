//! MIPS32 subset simulator library.
//!
//! This crate implements a fetch-decode-execute engine for a teaching subset of
//! MIPS32 with the following:
//! 1. **ISA:** Field extraction, decoding into R/I/J records, and mnemonic rendering.
//! 2. **Core:** Register file (with separate HI/LO), sparse word memory, ALU and executor.
//! 3. **Simulation:** Program loading, a stepping driver with halt policy, configuration,
//!    and statistics collection.

/// Common types shared across the simulator (errors, register file, constants).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// Machine state and execution (registers, memory, ALU, executor).
pub mod core;
/// Instruction set (field layout, opcodes, decode, render, ABI names).
pub mod isa;
/// Program loading and the stepping driver.
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Architectural state; owns registers and memory and executes decoded instructions.
pub use crate::core::{ExecOutcome, Machine};
/// Decoded instruction record.
pub use crate::isa::instruction::Instruction;
/// Stepping driver over one machine and one loaded program.
pub use crate::sim::{Program, Simulator};

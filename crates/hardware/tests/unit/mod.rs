//! # Unit Components
//!
//! Unit tests organized by component: shared types, ISA, machine core,
//! stepping driver, configuration and statistics.



/// Unit tests for the machine core (registers, memory, ALU, executor).
pub mod core;

//! Simulation utilities and program loading.
//!
//! Provides the loaded instruction list, a loader for program files and the
//! stepping driver that feeds lines to a [`Machine`](crate::core::Machine).

pub mod loader;
pub mod program;
pub mod simulator;

pub use program::{Listing, Program};
pub use simulator::{HaltReason, SimState, Simulator, StepEvent};

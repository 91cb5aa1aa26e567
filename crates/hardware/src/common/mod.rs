//! Common utilities and types used throughout the simulator.
//!
//! It includes:
//! 1. **Constants:** Word width, register counts and masks.
//! 2. **Error Handling:** Decode, load and configuration errors.
//! 3. **Register Management:** The register file with its separate HI/LO pair.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use constants::{NUM_GPRS, WORD_MASK};
pub use error::{ConfigError, DecodeError, LoadError};
pub use reg::{RegisterFile, RegisterRow};

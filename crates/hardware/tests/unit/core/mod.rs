//! # Core Unit Tests



/// Sparse memory tests.
pub mod memory;

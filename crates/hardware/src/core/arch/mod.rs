//! MIPS architectural register state.
//!
//! Only the general-purpose register file lives here; HI/LO are held next
//! to it in [`RegisterFile`](crate::common::reg::RegisterFile).

/// General-Purpose Register file implementation.
pub mod gpr;

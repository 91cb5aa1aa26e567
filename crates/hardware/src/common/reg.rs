//! Unified Register File.
//!
//! This module provides the `RegisterFile` struct, which combines the 32
//! general-purpose registers with the HI/LO multiply result pair.
//! It provides:
//! 1. **Unified Storage:** GPRs plus two named fields for HI and LO, kept outside
//!    the addressable `$0`-`$31` space.
//! 2. **Abstraction:** Unsigned and signed views of every register.
//! 3. **Observability:** A register report for display layers.

use std::fmt;

use crate::common::constants::NUM_GPRS;
use crate::core::arch::gpr::Gpr;
use crate::isa::abi;

/// Register file containing the general-purpose registers and HI/LO.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFile {
    gpr: Gpr,
    hi: u32,
    lo: u32,
}

impl RegisterFile {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            gpr: Gpr::new(),
            hi: 0,
            lo: 0,
        }
    }

    /// Reads a general-purpose register as an unsigned word.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Register `$zero` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits
    /// wide and always in range.
    pub fn read(&self, idx: usize) -> u32 {
        self.gpr.read(idx)
    }

    /// Reads a general-purpose register as a two's-complement signed word.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits
    /// wide and always in range.
    pub fn read_signed(&self, idx: usize) -> i32 {
        self.gpr.read(idx) as i32
    }

    /// Writes a value to a general-purpose register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). Writes to `$zero` are ignored.
    /// * `val` - The 32-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits
    /// wide and always in range.
    pub fn write(&mut self, idx: usize, val: u32) {
        self.gpr.write(idx, val);
    }

    /// High word of the last multiply result.
    pub const fn hi(&self) -> u32 {
        self.hi
    }

    /// Low word of the last multiply result.
    pub const fn lo(&self) -> u32 {
        self.lo
    }

    /// Stores both halves of a multiply result.
    pub fn write_hilo(&mut self, hi: u32, lo: u32) {
        self.hi = hi;
        self.lo = lo;
    }

    /// Returns every register, including HI and LO, to zero.
    pub fn clear(&mut self) {
        self.gpr.clear();
        self.hi = 0;
        self.lo = 0;
    }

    /// Builds a display row for each general-purpose register, in index order.
    pub fn report(&self) -> Vec<RegisterRow> {
        (0..NUM_GPRS)
            .map(|idx| RegisterRow {
                index: idx,
                name: abi::reg_name(idx),
                value: self.gpr.read(idx),
            })
            .collect()
    }

    /// Dumps the contents of all general-purpose registers and HI/LO to stdout.
    pub fn dump(&self) {
        self.gpr.dump();
        println!("{:<5}={:#010x} {:<5}={:#010x}", "hi", self.hi, "lo", self.lo);
    }
}

/// One line of a register report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegisterRow {
    /// Register index (0-31).
    pub index: usize,
    /// Conventional name, e.g. `$t0`.
    pub name: &'static str,
    /// Stored unsigned value.
    pub value: u32,
}

impl RegisterRow {
    /// The stored value reinterpreted as signed.
    pub const fn signed(&self) -> i32 {
        self.value as i32
    }
}

impl fmt::Display for RegisterRow {
    /// Formats as `name  signed-decimal  0xhex` in fixed-width columns.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<15}{:<20}{:#010x}", self.name, self.signed(), self.value)
    }
}

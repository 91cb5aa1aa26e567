//! MIPS General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 word-sized registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$zero` always reads as zero.
//! 3. **Debugging:** A paired hex dump keyed by ABI name.

use crate::common::constants::NUM_GPRS;
use crate::isa::abi;

/// The 32 addressable MIPS registers.
///
/// Values are stored as unsigned 32-bit words. Register `$zero` is hardwired to
/// zero; writes to it are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; NUM_GPRS],
}

impl Gpr {
    /// Creates a register file with every register zeroed.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_GPRS],
        }
    }

    /// Reads register `idx`.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register number, `0..32`.
    ///
    /// # Returns
    ///
    /// The 32-bit value stored in the specified register. Register `$zero` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater.
    pub fn read(&self, idx: usize) -> u32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes `val` to register `idx`.
    ///
    /// This is the single write primitive of the machine: a write to
    /// `$zero` is silently dropped.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register number, `0..32`.
    /// * `val` - The 32-bit value to write.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != abi::REG_ZERO {
            self.regs[idx] = val;
        }
    }

    /// Returns every register to zero.
    pub fn clear(&mut self) {
        self.regs = [0; NUM_GPRS];
    }

    /// Prints every register to stdout, two per line, as `name=0x........`.
    pub fn dump(&self) {
        for i in (0..NUM_GPRS).step_by(2) {
            println!(
                "{:<5}={:#010x} {:<5}={:#010x}",
                abi::reg_name(i),
                self.regs[i],
                abi::reg_name(i + 1),
                self.regs[i + 1]
            );
        }
    }
}

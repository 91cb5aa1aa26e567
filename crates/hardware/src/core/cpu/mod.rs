//! Machine state.
//!
//! A [`Machine`] exclusively owns one register file and one memory. It has no
//! program counter: the caller supplies each decoded instruction, so
//! sequencing is entirely the caller's responsibility.

/// Instruction execution.
pub mod execution;

/// Sparse word memory.
pub mod memory;

use crate::common::reg::{RegisterFile, RegisterRow};
use crate::isa::operation::Operation;

use self::memory::Memory;

/// Result of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecOutcome {
    /// The instruction updated registers or memory.
    Executed,
    /// A recognized instruction with no effect on machine state (control
    /// transfer, I/O or termination); the caller decides what it means.
    Delegated(Operation),
    /// The `(opcode, funct)` combination is not implemented; nothing happened.
    Ignored,
}

/// Architectural state: register file plus memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Machine {
    regs: RegisterFile,
    memory: Memory,
}

impl Machine {
    /// Creates a machine with zeroed registers and empty memory.
    pub fn new() -> Self {
        Self {
            regs: RegisterFile::new(),
            memory: Memory::new(),
        }
    }

    /// Returns all registers (general-purpose and HI/LO) to zero and clears memory.
    ///
    /// Idempotent.
    pub fn reset(&mut self) {
        self.regs.clear();
        self.memory.clear();
        tracing::debug!("machine reset");
    }

    /// Read-only view of the register file.
    pub const fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    /// Mutable access to the register file, for preloading state.
    pub fn regs_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    /// Read-only view of memory.
    pub const fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Mutable access to memory, for preloading state.
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    /// Unsigned value of a general-purpose register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits
    /// wide and always in range.
    pub fn reg(&self, idx: usize) -> u32 {
        self.regs.read(idx)
    }

    /// Signed value of a general-purpose register.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is 32 or greater. Decoded register fields are 5 bits
    /// wide and always in range.
    pub fn reg_signed(&self, idx: usize) -> i32 {
        self.regs.read_signed(idx)
    }

    /// High word of the last multiply.
    pub const fn hi(&self) -> u32 {
        self.regs.hi()
    }

    /// Low word of the last multiply.
    pub const fn lo(&self) -> u32 {
        self.regs.lo()
    }

    /// Display rows for every general-purpose register.
    pub fn register_report(&self) -> Vec<RegisterRow> {
        self.regs.report()
    }

    /// Dumps registers and mapped memory to stdout.
    pub fn dump_state(&self) {
        self.regs.dump();
        for (addr, val) in self.memory.iter() {
            println!("mem[{addr}]={val:#010x}");
        }
    }
}

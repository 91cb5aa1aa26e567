//! Simulation statistics collection and reporting.
//!
//! This module tracks what the stepping driver did. It provides:
//! 1. **Outcomes:** Steps taken and how each instruction was handled.
//! 2. **Instruction mix:** Counts by [`OpClass`] for recognized instructions.

use crate::core::ExecOutcome;
use crate::isa::operation::{OpClass, Operation};

/// Simulation statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Lines consumed by the driver, including malformed ones that were skipped.
    pub steps: u64,
    /// Instructions that updated machine state.
    pub executed: u64,
    /// Recognized instructions handed back to the caller.
    pub delegated: u64,
    /// Unrecognized instructions.
    pub ignored: u64,
    /// Lines that were not valid instruction words.
    pub malformed: u64,

    /// ALU instructions (arithmetic, logic, shifts, comparisons, `lui`).
    pub inst_alu: u64,
    /// `mult` instructions.
    pub inst_multiply: u64,
    /// Load instructions.
    pub inst_load: u64,
    /// Store instructions.
    pub inst_store: u64,
    /// Jump instructions.
    pub inst_jump: u64,
    /// System instructions (`syscall`, `print_*`, `exit`).
    pub inst_system: u64,
}

impl SimStats {
    /// Records the outcome of one executed instruction.
    pub fn record(&mut self, op: Option<Operation>, outcome: ExecOutcome) {
        self.steps += 1;
        match outcome {
            ExecOutcome::Executed => self.executed += 1,
            ExecOutcome::Delegated(_) => self.delegated += 1,
            ExecOutcome::Ignored => self.ignored += 1,
        }

        let Some(op) = op else { return };
        match op.class() {
            OpClass::Alu => self.inst_alu += 1,
            OpClass::Multiply => self.inst_multiply += 1,
            OpClass::Load => self.inst_load += 1,
            OpClass::Store => self.inst_store += 1,
            OpClass::Jump => self.inst_jump += 1,
            OpClass::System => self.inst_system += 1,
        }
    }

    /// Records a line that could not be decoded.
    ///
    /// `consumed` is true when the driver moved past the line.
    pub fn record_malformed(&mut self, consumed: bool) {
        self.malformed += 1;
        if consumed {
            self.steps += 1;
        }
    }

    /// Prints a summary to stdout.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("MIPS SIMULATION STATISTICS");
        println!("==========================================================");
        println!("sim_steps                {}", self.steps);
        println!("sim_executed             {}", self.executed);
        println!("sim_delegated            {}", self.delegated);
        println!("sim_ignored              {}", self.ignored);
        println!("sim_malformed            {}", self.malformed);
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!("  alu                    {}", self.inst_alu);
        println!("  multiply               {}", self.inst_multiply);
        println!("  load                   {}", self.inst_load);
        println!("  store                  {}", self.inst_store);
        println!("  jump                   {}", self.inst_jump);
        println!("  system                 {}", self.inst_system);
        println!("==========================================================");
    }
}

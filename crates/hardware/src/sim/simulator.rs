//! Simulator: one machine plus one loaded program.
//!
//! The driver holds the instruction cursor that the machine deliberately does
//! not have. Each step decodes the line under the cursor, executes it and
//! advances. The driver halts at the end of the program, on an `exit`
//! instruction (when configured) and, under [`MalformedLinePolicy::Halt`], on
//! the first line that is not a valid instruction word.

use crate::common::error::DecodeError;
use crate::config::{Config, MalformedLinePolicy};
use crate::core::{ExecOutcome, Machine};
use crate::isa::decode::decode_line;
use crate::isa::instruction::Instruction;
use crate::isa::operation::Operation;
use crate::sim::program::Program;
use crate::stats::SimStats;

/// Driver state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimState {
    /// The cursor points at the next line to execute.
    #[default]
    Ready,
    /// No more instructions will be executed until [`Simulator::reset`].
    Halted,
}

/// Why the driver halted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// The cursor moved past the last line.
    EndOfProgram,
    /// An `exit` instruction was executed on `line`.
    Exit {
        /// Zero-based line of the `exit`.
        line: usize,
    },
    /// `line` is not a valid instruction word.
    Malformed {
        /// Zero-based line that failed to decode.
        line: usize,
        /// Decode failure.
        error: DecodeError,
    },
}

/// What a single [`Simulator::step`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEvent {
    /// A line was decoded and handed to the machine.
    Stepped {
        /// Zero-based line that was executed.
        line: usize,
        /// Decoded record.
        instruction: Instruction,
        /// Machine outcome.
        outcome: ExecOutcome,
    },
    /// A malformed line was skipped.
    Skipped {
        /// Zero-based line that was skipped.
        line: usize,
        /// Decode failure.
        error: DecodeError,
    },
    /// Nothing was executed; the driver is halted.
    Halted(HaltReason),
}

/// Top-level simulator: machine state plus the loaded program and cursor.
#[derive(Clone, Debug)]
pub struct Simulator {
    machine: Machine,
    program: Program,
    cursor: usize,
    state: SimState,
    halt_reason: Option<HaltReason>,
    config: Config,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator over `program` with a fresh machine.
    pub fn new(program: Program, config: &Config) -> Self {
        Self {
            machine: Machine::new(),
            program,
            cursor: 0,
            state: SimState::Ready,
            halt_reason: None,
            config: config.clone(),
            stats: SimStats::default(),
        }
    }

    /// Executes the line under the cursor.
    pub fn step(&mut self) -> StepEvent {
        if let Some(reason) = &self.halt_reason {
            return StepEvent::Halted(reason.clone());
        }

        let line = self.cursor;
        let Some(source) = self.program.line(line) else {
            return self.halt(HaltReason::EndOfProgram);
        };

        let instruction = match decode_line(source) {
            Ok(instruction) => instruction,
            Err(error) => return self.malformed(line, error),
        };

        let outcome = self.machine.execute(&instruction);
        self.stats.record(instruction.operation(), outcome);
        self.cursor += 1;

        if self.config.general.trace_instructions {
            tracing::info!(line, %instruction, ?outcome, "step");
        } else {
            tracing::trace!(line, %instruction, ?outcome, "step");
        }

        if outcome == ExecOutcome::Delegated(Operation::Exit) && self.config.general.halt_on_exit {
            let _ = self.halt(HaltReason::Exit { line });
        }

        StepEvent::Stepped {
            line,
            instruction,
            outcome,
        }
    }

    /// Steps until the driver halts.
    ///
    /// Does not reset first; call [`Simulator::reset`] to re-run from the top.
    pub fn run(&mut self) -> HaltReason {
        loop {
            if let StepEvent::Halted(reason) = self.step() {
                return reason;
            }
        }
    }

    /// Clears registers, memory, cursor and statistics. The program is kept.
    pub fn reset(&mut self) {
        self.machine.reset();
        self.cursor = 0;
        self.state = SimState::Ready;
        self.halt_reason = None;
        self.stats = SimStats::default();
    }

    /// Current driver state.
    pub const fn state(&self) -> SimState {
        self.state
    }

    /// Why the driver halted, if it has.
    pub const fn halt_reason(&self) -> Option<&HaltReason> {
        self.halt_reason.as_ref()
    }

    /// Zero-based index of the next line to execute.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Read-only view of the machine.
    pub const fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Mutable access to the machine, for preloading registers or memory.
    pub fn machine_mut(&mut self) -> &mut Machine {
        &mut self.machine
    }

    /// The loaded program.
    pub const fn program(&self) -> &Program {
        &self.program
    }

    /// Statistics since construction or the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    fn malformed(&mut self, line: usize, error: DecodeError) -> StepEvent {
        tracing::warn!(line, %error, "malformed instruction word");
        match self.config.general.malformed_lines {
            MalformedLinePolicy::Halt => {
                self.stats.record_malformed(false);
                self.halt(HaltReason::Malformed { line, error })
            }
            MalformedLinePolicy::Skip => {
                self.stats.record_malformed(true);
                self.cursor += 1;
                StepEvent::Skipped { line, error }
            }
        }
    }

    fn halt(&mut self, reason: HaltReason) -> StepEvent {
        tracing::debug!(?reason, cursor = self.cursor, "simulator halted");
        self.state = SimState::Halted;
        self.halt_reason = Some(reason.clone());
        StepEvent::Halted(reason)
    }
}

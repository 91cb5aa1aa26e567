//! # Simulator Tests
//!
//! Halting at end of program, on `exit` and on malformed lines, the skip
//! policy, and reset semantics.

use mips_core::common::DecodeError;
use mips_core::config::{Config, MalformedLinePolicy};
use mips_core::core::ExecOutcome;
use mips_core::isa::operation::Operation;
use mips_core::sim::{HaltReason, Program, SimState, Simulator, StepEvent};
use pretty_assertions::assert_eq;

use crate::common::builder::instruction::InstructionBuilder as B;

fn skip_config() -> Config {
    let mut config = Config::default();
    config.general.malformed_lines = MalformedLinePolicy::Skip;
    config
}

fn simulator(source: &str, config: &Config) -> Simulator {
    Simulator::new(Program::from_source(source), config)
}

/// `$at = 5; $v0 = 7; $v1 = $at + $v0`
fn add_program() -> Program {
    Program::from_words(&[
        B::addi(1, 0, 5).build(),
        B::addi(2, 0, 7).build(),
        B::add(3, 1, 2).build(),
    ])
}

#[test]
fn test_run_to_end_of_program() {
    let mut sim = Simulator::new(add_program(), &Config::default());
    assert_eq!(sim.state(), SimState::Ready);

    assert_eq!(sim.run(), HaltReason::EndOfProgram);
    assert_eq!(sim.state(), SimState::Halted);
    assert_eq!(sim.cursor(), 3);
    assert_eq!(sim.machine().reg(3), 12);
}

#[test]
fn test_step_reports_each_line() {
    let mut sim = Simulator::new(add_program(), &Config::default());

    let StepEvent::Stepped { line, outcome, instruction } = sim.step() else {
        panic!("expected a stepped event");
    };
    assert_eq!(line, 0);
    assert_eq!(outcome, ExecOutcome::Executed);
    assert_eq!(instruction.to_string(), "addi $at, $zero, 5");
    assert_eq!(sim.cursor(), 1);
}

#[test]
fn test_step_after_halt_is_stable() {
    let mut sim = simulator("", &Config::default());
    assert_eq!(sim.step(), StepEvent::Halted(HaltReason::EndOfProgram));
    assert_eq!(sim.step(), StepEvent::Halted(HaltReason::EndOfProgram));
    assert_eq!(sim.cursor(), 0);
    assert_eq!(sim.stats().steps, 0);
}

#[test]
fn test_exit_halts_by_default() {
    let words = [B::addi(1, 0, 1).build(), B::exit().build(), B::addi(1, 0, 2).build()];
    let mut sim = Simulator::new(Program::from_words(&words), &Config::default());

    let _ = sim.step();
    let event = sim.step();
    assert!(matches!(
        event,
        StepEvent::Stepped {
            line: 1,
            outcome: ExecOutcome::Delegated(Operation::Exit),
            ..
        }
    ));
    assert_eq!(sim.state(), SimState::Halted);
    assert_eq!(sim.halt_reason(), Some(&HaltReason::Exit { line: 1 }));

    assert_eq!(sim.run(), HaltReason::Exit { line: 1 });
    assert_eq!(sim.machine().reg(1), 1);
}

#[test]
fn test_exit_continues_when_disabled() {
    let mut config = Config::default();
    config.general.halt_on_exit = false;
    let words = [B::exit().build(), B::addi(1, 0, 2).build()];
    let mut sim = Simulator::new(Program::from_words(&words), &config);

    assert_eq!(sim.run(), HaltReason::EndOfProgram);
    assert_eq!(sim.machine().reg(1), 2);
}

#[test]
fn test_malformed_line_halts_by_default() {
    let source = format!("{}\n01x0\n{}", B::addi(1, 0, 1).line(), B::addi(2, 0, 2).line());
    let mut sim = simulator(&source, &Config::default());

    let reason = sim.run();
    assert_eq!(
        reason,
        HaltReason::Malformed {
            line: 1,
            error: DecodeError::WrongLength { len: 4 },
        }
    );
    assert_eq!(sim.cursor(), 1);
    assert_eq!(sim.machine().reg(1), 1);
    assert_eq!(sim.machine().reg(2), 0);
    assert_eq!(sim.stats().malformed, 1);
    assert_eq!(sim.stats().steps, 1);
}

#[test]
fn test_malformed_line_skipped_with_skip_policy() {
    let bad = "0000000000000000000000000000000x";
    let source = format!("{}\n{bad}\n{}", B::addi(1, 0, 1).line(), B::addi(2, 0, 2).line());
    let mut sim = simulator(&source, &skip_config());

    let _ = sim.step();
    assert_eq!(
        sim.step(),
        StepEvent::Skipped {
            line: 1,
            error: DecodeError::InvalidBit { index: 31, found: 'x' },
        }
    );
    assert_eq!(sim.run(), HaltReason::EndOfProgram);
    assert_eq!(sim.machine().reg(2), 2);
    assert_eq!(sim.stats().malformed, 1);
    assert_eq!(sim.stats().steps, 3);
}

#[test]
fn test_reset_keeps_program() {
    let mut sim = Simulator::new(add_program(), &Config::default());
    let _ = sim.run();

    sim.reset();
    assert_eq!(sim.state(), SimState::Ready);
    assert_eq!(sim.cursor(), 0);
    assert_eq!(sim.halt_reason(), None);
    assert_eq!(sim.machine().reg(3), 0);
    assert_eq!(sim.stats().steps, 0);
    assert_eq!(sim.program(), &add_program());

    assert_eq!(sim.run(), HaltReason::EndOfProgram);
    assert_eq!(sim.machine().reg(3), 12);
}

#[test]
fn test_preloaded_registers_are_used() {
    let program = Program::from_words(&[B::add(3, 1, 2).build()]);
    let mut sim = Simulator::new(program, &Config::default());
    sim.machine_mut().regs_mut().write(1, 40);
    sim.machine_mut().regs_mut().write(2, 2);
    let _ = sim.run();
    assert_eq!(sim.machine().reg(3), 42);
}

#[test]
fn test_stats_instruction_mix() {
    let words = [
        B::addi(1, 0, 3).build(),
        B::mult(1, 1).build(),
        B::sw(1, 0, 0).build(),
        B::lw(2, 0, 0).build(),
        B::j(0).build(),
        B::print_int(2).build(),
        0b010001 << 26,
        B::exit().build(),
    ];
    let mut sim = Simulator::new(Program::from_words(&words), &Config::default());
    let _ = sim.run();

    let stats = sim.stats();
    assert_eq!(stats.steps, 8);
    assert_eq!(stats.executed, 4);
    assert_eq!(stats.delegated, 3);
    assert_eq!(stats.ignored, 1);
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.inst_multiply, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_jump, 1);
    assert_eq!(stats.inst_system, 2);
}

#[test]
fn test_preloaded_memory_is_used() {
    let program = Program::from_words(&[B::lw(8, 4, 29).build(), B::exit().build()]);
    let mut sim = Simulator::new(program, &Config::default());
    sim.machine_mut().regs_mut().write(29, 100);
    sim.machine_mut().memory_mut().write_word(104, 0xDEAD_BEEF);

    assert_eq!(sim.run(), HaltReason::Exit { line: 1 });
    assert_eq!(sim.machine().reg(8), 0xDEAD_BEEF);
}

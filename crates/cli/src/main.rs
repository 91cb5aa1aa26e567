//! MIPS32 subset simulator CLI.
//!
//! This binary is a thin shell over `mips-core`. It performs:
//! 1. **Run:** Load a program of binary instruction words, step it to completion
//!    (or for a fixed number of steps) and print the register report.
//! 2. **Disassemble:** Render every line of a program without executing it.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mips_core::config::Config;
use mips_core::core::{ExecOutcome, Machine};
use mips_core::isa::instruction::Instruction;
use mips_core::isa::operation::Operation;
use mips_core::sim::{HaltReason, Program, Simulator, StepEvent, loader};

#[derive(Parser, Debug)]
#[command(
    name = "sim",
    author,
    version,
    about = "MIPS32 subset simulator",
    long_about = "Decode, render and execute programs written as one 32-character binary instruction word per line.\n\nExamples:\n  sim run -f program.txt\n  sim run -f program.txt --steps 3\n  sim disasm -f program.txt"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program and print the final machine state.
    Run {
        /// Program file: one 32-character binary word per line.
        #[arg(short, long)]
        file: PathBuf,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop after this many steps instead of running to completion.
        #[arg(long)]
        steps: Option<usize>,

        /// Also print the simulation statistics.
        #[arg(long)]
        stats: bool,

        /// Print registers and memory as a compact hex dump instead of a table.
        #[arg(long)]
        compact: bool,
    },

    /// Render every line of a program as assembler text without executing it.
    Disasm {
        /// Program file: one 32-character binary word per line.
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            file,
            config,
            steps,
            stats,
            compact,
        } => cmd_run(&file, config.as_deref(), steps, RunOutput { stats, compact }),
        Commands::Disasm { file } => cmd_disasm(&file),
    }
}

/// Loads the program or exits with status 1.
fn load_or_exit(file: &Path) -> Program {
    loader::load_program(file).unwrap_or_else(|e| {
        tracing::error!(path = %file.display(), error = %e, "program load failed");
        eprintln!("\n[!] FATAL: {e}");
        process::exit(1);
    })
}

/// Output switches for `sim run`.
#[derive(Clone, Copy, Debug)]
struct RunOutput {
    stats: bool,
    compact: bool,
}

/// Runs a program: steps until halted (or `steps` is reached), echoing each
/// instruction, then prints registers, HI/LO and touched memory.
fn cmd_run(file: &Path, config_path: Option<&Path>, steps: Option<usize>, output: RunOutput) {
    let config = match config_path {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            tracing::error!(path = %path.display(), error = %e, "config load failed");
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };

    let program = load_or_exit(file);
    println!("[*] Loaded {} ({} lines)", file.display(), program.len());

    let mut sim = Simulator::new(program, &config);
    let limit = steps.unwrap_or(usize::MAX);
    let mut taken = 0;

    while taken < limit {
        match sim.step() {
            StepEvent::Stepped {
                line,
                instruction,
                outcome,
            } => {
                println!("{:>4}: {instruction}", line + 1);
                if let ExecOutcome::Delegated(op) = outcome {
                    console_output(sim.machine(), &instruction, op);
                }
            }
            StepEvent::Skipped { line, error } => {
                println!("{:>4}: <skipped: {error}>", line + 1);
            }
            StepEvent::Halted(reason) => {
                report_halt(&reason);
                break;
            }
        }
        taken += 1;
    }

    if output.compact {
        println!();
        sim.machine().dump_state();
    } else {
        print_state(sim.machine());
    }
    if output.stats {
        sim.stats().print();
    }
}

/// Performs the console side of `print_int` / `print_str`.
fn console_output(machine: &Machine, instruction: &Instruction, op: Operation) {
    let Instruction::I(i) = instruction else {
        return;
    };
    match op {
        Operation::PrintInt => println!("      > {}", machine.reg_signed(i.rt)),
        Operation::PrintStr => {
            let text: String = machine
                .reg(i.rt)
                .to_be_bytes()
                .iter()
                .take_while(|&&b| b != 0)
                .map(|&b| char::from(b))
                .collect();
            println!("      > {text}");
        }
        _ => {}
    }
}

fn report_halt(reason: &HaltReason) {
    match reason {
        HaltReason::EndOfProgram => println!("\n[*] Execution complete"),
        HaltReason::Exit { line } => println!("\n[*] Program exited at line {}", line + 1),
        HaltReason::Malformed { line, error } => {
            println!("\n[*] Execution complete at line {}: {error}", line + 1);
        }
    }
}

/// Prints the register report, HI/LO and mapped memory.
fn print_state(machine: &Machine) {
    println!();
    println!("{:<15}{:<20}{}", "Register", "Decimal", "Hex");
    for row in machine.register_report() {
        println!("{row}");
    }
    println!("{:<15}{:<20}{:#010x}", "hi", machine.hi() as i32, machine.hi());
    println!("{:<15}{:<20}{:#010x}", "lo", machine.lo() as i32, machine.lo());

    if !machine.memory().is_empty() {
        println!();
        println!("{:<15}{:<20}{}", "Address", "Decimal", "Hex");
        for (addr, val) in machine.memory().iter() {
            println!("{addr:<15}{:<20}{val:#010x}", val as i32);
        }
    }
}

/// Prints one rendered line per program line.
fn cmd_disasm(file: &Path) {
    let program = load_or_exit(file);
    for listing in program.disassemble() {
        match listing.text {
            Ok(text) => println!("{:>4}: {}  {text}", listing.line + 1, listing.source),
            Err(e) => println!("{:>4}: {:<32}  <{e}>", listing.line + 1, listing.source),
        }
    }
}

//! Operation dispatch.
//!
//! Resolves the `(opcode, funct)` pair of a decoded record to the operation it
//! names. The renderer and the executor both key off [`Instruction::operation`],
//! so a combination is either recognized by both or by neither.

use crate::isa::instruction::Instruction;
use crate::isa::{funct, opcodes};

/// A recognized operation of the supported subset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `add rd, rs, rt`
    Add,
    /// `sub rd, rs, rt`
    Sub,
    /// `mult rs, rt`
    Mult,
    /// `and rd, rs, rt`
    And,
    /// `or rd, rs, rt`
    Or,
    /// `sll rd, rt, shamt`
    Sll,
    /// `slt rd, rs, rt`
    Slt,
    /// `syscall`
    Syscall,
    /// `addi rt, rs, immediate`
    Addi,
    /// `slti rt, rs, immediate`
    Slti,
    /// `lw rt, immediate(rs)`
    Lw,
    /// `sw rt, immediate(rs)`
    Sw,
    /// `lui rt, immediate`
    Lui,
    /// `j address`
    J,
    /// `print_int rt`
    PrintInt,
    /// `print_str rt`
    PrintStr,
    /// `exit`
    Exit,
}

/// Broad instruction category, used for the instruction mix in statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpClass {
    /// Register or immediate arithmetic, logic, shifts and comparisons.
    Alu,
    /// Multiplication into HI/LO.
    Multiply,
    /// Memory loads.
    Load,
    /// Memory stores.
    Store,
    /// Control transfer.
    Jump,
    /// System calls, console output and program exit.
    System,
}

impl Operation {
    /// Assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mult => "mult",
            Self::And => "and",
            Self::Or => "or",
            Self::Sll => "sll",
            Self::Slt => "slt",
            Self::Syscall => "syscall",
            Self::Addi => "addi",
            Self::Slti => "slti",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Lui => "lui",
            Self::J => "j",
            Self::PrintInt => "print_int",
            Self::PrintStr => "print_str",
            Self::Exit => "exit",
        }
    }

    /// Category of the operation.
    pub const fn class(self) -> OpClass {
        match self {
            Self::Add
            | Self::Sub
            | Self::And
            | Self::Or
            | Self::Sll
            | Self::Slt
            | Self::Addi
            | Self::Slti
            | Self::Lui => OpClass::Alu,
            Self::Mult => OpClass::Multiply,
            Self::Lw => OpClass::Load,
            Self::Sw => OpClass::Store,
            Self::J => OpClass::Jump,
            Self::Syscall | Self::PrintInt | Self::PrintStr | Self::Exit => OpClass::System,
        }
    }

    /// Whether the operation has no effect on machine state and is left to the
    /// caller (control transfer, I/O and termination).
    pub const fn is_delegated(self) -> bool {
        matches!(
            self,
            Self::J | Self::Syscall | Self::PrintInt | Self::PrintStr | Self::Exit
        )
    }
}

impl Instruction {
    /// Resolves the operation named by this record, or `None` when the
    /// `(opcode, funct)` combination is not part of the supported subset.
    pub const fn operation(&self) -> Option<Operation> {
        match self {
            Self::R(r) => match r.funct {
                funct::ADD => Some(Operation::Add),
                funct::SUB => Some(Operation::Sub),
                funct::MULT => Some(Operation::Mult),
                funct::AND => Some(Operation::And),
                funct::OR => Some(Operation::Or),
                funct::SLL => Some(Operation::Sll),
                funct::SLT => Some(Operation::Slt),
                funct::SYSCALL => Some(Operation::Syscall),
                _ => None,
            },
            Self::I(i) => match i.opcode {
                opcodes::OP_ADDI => Some(Operation::Addi),
                opcodes::OP_SLTI => Some(Operation::Slti),
                opcodes::OP_LW => Some(Operation::Lw),
                opcodes::OP_SW => Some(Operation::Sw),
                opcodes::OP_LUI => Some(Operation::Lui),
                opcodes::OP_PRINT_INT => Some(Operation::PrintInt),
                opcodes::OP_PRINT_STR => Some(Operation::PrintStr),
                opcodes::OP_EXIT => Some(Operation::Exit),
                _ => None,
            },
            Self::J(j) => match j.opcode {
                opcodes::OP_J => Some(Operation::J),
                _ => None,
            },
        }
    }
}

//! Instruction Renderer for the MIPS32 subset.
//!
//! Converts a decoded record into assembler text for step previews, batch
//! listings and traces. Registers are shown by conventional name, immediates as
//! signed decimal and jump targets as unsigned decimal.
//!
//! # Usage
//!
//! ```
//! use mips_core::isa::disasm::disassemble;
//! let text = disassemble(0b000000_00001_00010_00011_00000_100000);
//! assert_eq!(text, "add $v1, $at, $v0");
//! ```

use std::fmt;

use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;
use crate::isa::operation::Operation;

/// Renders a decoded record as assembler text.
///
/// Never fails: combinations outside the supported subset render as an
/// `unimplemented` placeholder carrying the opcode (and the funct for
/// R-format words).
pub fn render(inst: &Instruction) -> String {
    let Some(op) = inst.operation() else {
        return render_unimplemented(inst);
    };
    let mn = op.mnemonic();

    match *inst {
        Instruction::R(r) => match op {
            Operation::Syscall => mn.to_owned(),
            Operation::Mult => format!("{mn} {}, {}", reg_name(r.rs), reg_name(r.rt)),
            Operation::Sll => format!("{mn} {}, {}, {}", reg_name(r.rd), reg_name(r.rt), r.shamt),
            _ => format!(
                "{mn} {}, {}, {}",
                reg_name(r.rd),
                reg_name(r.rs),
                reg_name(r.rt)
            ),
        },
        Instruction::I(i) => match op {
            Operation::Exit => mn.to_owned(),
            Operation::PrintInt | Operation::PrintStr => format!("{mn} {}", reg_name(i.rt)),
            Operation::Lui => format!("{mn} {}, {}", reg_name(i.rt), i.immediate),
            Operation::Lw | Operation::Sw => {
                format!("{mn} {}, {}({})", reg_name(i.rt), i.immediate, reg_name(i.rs))
            }
            _ => format!(
                "{mn} {}, {}, {}",
                reg_name(i.rt),
                reg_name(i.rs),
                i.immediate
            ),
        },
        Instruction::J(j) => format!("{mn} {}", j.address),
    }
}

/// Decodes and renders a raw 32-bit word.
pub fn disassemble(word: u32) -> String {
    render(&decode(word))
}

fn render_unimplemented(inst: &Instruction) -> String {
    match inst {
        Instruction::R(r) => format!(
            "unimplemented (opcode: {:06b}, funct: {:06b})",
            inst.opcode(),
            r.funct
        ),
        _ => format!("unimplemented (opcode: {:06b})", inst.opcode()),
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

//! Instruction execution.
//!
//! Applies one decoded record to the machine. Every register write goes through
//! [`RegisterFile::write`](crate::common::reg::RegisterFile::write), so writes
//! to `$zero` are dropped, and every stored value is already a 32-bit word.
//! Execution never fails: unrecognized combinations are reported as
//! [`ExecOutcome::Ignored`].

use super::{ExecOutcome, Machine};
use crate::common::constants::LUI_SHIFT;
use crate::core::units::alu::{Alu, AluOp, arithmetic};
use crate::isa::instruction::{IFormat, Instruction, RFormat};
use crate::isa::operation::Operation;

impl Machine {
    /// Executes a decoded instruction.
    ///
    /// # Returns
    ///
    /// * [`ExecOutcome::Executed`] when registers or memory were updated.
    /// * [`ExecOutcome::Delegated`] for `j`, `syscall`, `print_int`,
    ///   `print_str` and `exit`, which leave the machine untouched.
    /// * [`ExecOutcome::Ignored`] for combinations outside the supported subset.
    pub fn execute(&mut self, inst: &Instruction) -> ExecOutcome {
        let Some(op) = inst.operation() else {
            tracing::debug!(
                word = inst.encode(),
                opcode = inst.opcode(),
                "ignoring unimplemented instruction"
            );
            return ExecOutcome::Ignored;
        };

        // Every J-format operation is delegated.
        match *inst {
            Instruction::R(r) if !op.is_delegated() => self.execute_register(op, r),
            Instruction::I(i) if !op.is_delegated() => self.execute_immediate(op, i),
            _ => {
                tracing::debug!(mnemonic = op.mnemonic(), "delegating instruction to caller");
                return ExecOutcome::Delegated(op);
            }
        }
        ExecOutcome::Executed
    }

    fn execute_register(&mut self, op: Operation, r: RFormat) {
        let rs = self.regs.read(r.rs);
        let rt = self.regs.read(r.rt);

        match op {
            Operation::Mult => {
                let (hi, lo) = arithmetic::multiply(rs, rt);
                self.regs.write_hilo(hi, lo);
            }
            Operation::Sll => self.regs.write(r.rd, Alu::execute(AluOp::Sll, rt, r.shamt)),
            _ => {
                if let Some(alu_op) = AluOp::from_operation(op) {
                    self.regs.write(r.rd, Alu::execute(alu_op, rs, rt));
                }
            }
        }
    }

    fn execute_immediate(&mut self, op: Operation, i: IFormat) {
        let rs = self.regs.read(i.rs);

        match op {
            Operation::Lw => {
                let addr = effective_address(rs, i.immediate);
                let val = self.memory.read_word(addr);
                self.regs.write(i.rt, val);
            }
            Operation::Sw => {
                let addr = effective_address(rs, i.immediate);
                self.memory.write_word(addr, self.regs.read(i.rt));
            }
            // The immediate is zero-extended here, never sign-extended.
            Operation::Lui => self
                .regs
                .write(i.rt, u32::from(i.raw_immediate()) << LUI_SHIFT),
            _ => {
                if let Some(alu_op) = AluOp::from_operation(op) {
                    self.regs
                        .write(i.rt, Alu::execute(alu_op, rs, i.immediate as u32));
                }
            }
        }
    }
}

/// Base register value (unsigned) plus signed offset.
#[inline]
fn effective_address(base: u32, offset: i32) -> i64 {
    i64::from(base) + i64::from(offset)
}

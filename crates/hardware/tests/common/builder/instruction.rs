use mips_core::isa::{funct, opcodes};

/// Fluent builder for raw MIPS instruction words.
pub struct InstructionBuilder {
    opcode: u32,
    rs: u32,
    rt: u32,
    rd: u32,
    shamt: u32,
    funct: u32,
    imm: Option<u16>,
    address: Option<u32>,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rs: 0,
            rt: 0,
            rd: 0,
            shamt: 0,
            funct: 0,
            imm: None,
            address: None,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rs(mut self, rs: u32) -> Self {
        self.rs = rs;
        self
    }

    pub fn rt(mut self, rt: u32) -> Self {
        self.rt = rt;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn shamt(mut self, shamt: u32) -> Self {
        self.shamt = shamt;
        self
    }

    pub fn funct(mut self, funct: u32) -> Self {
        self.funct = funct;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = Some(imm as u16);
        self
    }

    pub fn address(mut self, address: u32) -> Self {
        self.address = Some(address);
        self
    }

    pub fn build(self) -> u32 {
        let head = (self.opcode & 0x3F) << 26;
        if let Some(address) = self.address {
            return head | (address & 0x03FF_FFFF);
        }
        let regs = head | (self.rs & 0x1F) << 21 | (self.rt & 0x1F) << 16;
        match self.imm {
            Some(imm) => regs | u32::from(imm),
            None => regs | (self.rd & 0x1F) << 11 | (self.shamt & 0x1F) << 6 | (self.funct & 0x3F),
        }
    }

    /// Builds the word as a 32-character binary line.
    pub fn line(self) -> String {
        format!("{:032b}", self.build())
    }

    // --- Helpers for the supported subset ---

    pub fn r_type(funct: u32, rd: u32, rs: u32, rt: u32) -> Self {
        Self::new()
            .opcode(opcodes::OP_SPECIAL)
            .funct(funct)
            .rd(rd)
            .rs(rs)
            .rt(rt)
    }

    pub fn i_type(opcode: u32, rt: u32, rs: u32, imm: i32) -> Self {
        Self::new().opcode(opcode).rt(rt).rs(rs).imm(imm)
    }

    pub fn add(rd: u32, rs: u32, rt: u32) -> Self {
        Self::r_type(funct::ADD, rd, rs, rt)
    }

    pub fn sub(rd: u32, rs: u32, rt: u32) -> Self {
        Self::r_type(funct::SUB, rd, rs, rt)
    }

    pub fn and(rd: u32, rs: u32, rt: u32) -> Self {
        Self::r_type(funct::AND, rd, rs, rt)
    }

    pub fn or(rd: u32, rs: u32, rt: u32) -> Self {
        Self::r_type(funct::OR, rd, rs, rt)
    }

    pub fn slt(rd: u32, rs: u32, rt: u32) -> Self {
        Self::r_type(funct::SLT, rd, rs, rt)
    }

    pub fn mult(rs: u32, rt: u32) -> Self {
        Self::r_type(funct::MULT, 0, rs, rt)
    }

    pub fn sll(rd: u32, rt: u32, shamt: u32) -> Self {
        Self::r_type(funct::SLL, rd, 0, rt).shamt(shamt)
    }

    pub fn syscall() -> Self {
        Self::r_type(funct::SYSCALL, 0, 0, 0)
    }

    pub fn addi(rt: u32, rs: u32, imm: i32) -> Self {
        Self::i_type(opcodes::OP_ADDI, rt, rs, imm)
    }

    pub fn slti(rt: u32, rs: u32, imm: i32) -> Self {
        Self::i_type(opcodes::OP_SLTI, rt, rs, imm)
    }

    pub fn lw(rt: u32, offset: i32, base: u32) -> Self {
        Self::i_type(opcodes::OP_LW, rt, base, offset)
    }

    pub fn sw(rt: u32, offset: i32, base: u32) -> Self {
        Self::i_type(opcodes::OP_SW, rt, base, offset)
    }

    pub fn lui(rt: u32, imm: i32) -> Self {
        Self::i_type(opcodes::OP_LUI, rt, 0, imm)
    }

    pub fn j(address: u32) -> Self {
        Self::new().opcode(opcodes::OP_J).address(address)
    }

    pub fn print_int(rt: u32) -> Self {
        Self::i_type(opcodes::OP_PRINT_INT, rt, 0, 0)
    }

    pub fn print_str(rt: u32) -> Self {
        Self::i_type(opcodes::OP_PRINT_STR, rt, 0, 0)
    }

    pub fn exit() -> Self {
        Self::i_type(opcodes::OP_EXIT, 0, 0, 0)
    }
}

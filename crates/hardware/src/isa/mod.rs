//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the MIPS32 field layout, the opcode and function code tables of the
//! supported subset, the decoder and the mnemonic renderer.
//!
//! # Supported subset
//!
//! * R-format: `add`, `sub`, `mult`, `and`, `or`, `sll`, `slt`, `syscall`.
//! * I-format: `addi`, `slti`, `lw`, `sw`, `lui`.
//! * J-format: `j`.
//! * Non-standard extensions: `print_int`, `print_str`, `exit`.

/// Conventional register name mappings.
pub mod abi;

/// Instruction decoding from text lines and raw words.
pub mod decode;

/// Instruction renderer for listings, step previews and traces.
pub mod disasm;

/// Function codes (bits 5-0) for R-format instructions.
pub mod funct;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Primary opcodes (bits 31-26).
pub mod opcodes;

/// Operation dispatch shared by the renderer and the executor.
pub mod operation;

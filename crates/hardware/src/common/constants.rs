//! System-wide constants.

/// Width of an instruction word and of every register, in bits.
pub const WORD_BITS: u32 = 32;

/// Number of characters in a textual instruction word.
pub const WORD_CHARS: usize = WORD_BITS as usize;

/// Mask applied to every stored arithmetic result.
pub const WORD_MASK: u64 = 0xFFFF_FFFF;

/// Number of general-purpose registers.
pub const NUM_GPRS: usize = 32;

/// Shift applied to the immediate by `lui`.
pub const LUI_SHIFT: u32 = 16;

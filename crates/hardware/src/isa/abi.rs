//! MIPS register naming conventions.
//!
//! Maps register indices to their conventional assembler names and back. The
//! mapping is a display/lookup layer only; the register file is indexed 0-31.

use crate::common::constants::NUM_GPRS;

/// Register `$zero` (always zero).
pub const REG_ZERO: usize = 0;
/// Register `$at` (assembler temporary).
pub const REG_AT: usize = 1;
/// Register `$v0` (first result).
pub const REG_V0: usize = 2;
/// Register `$v1` (second result).
pub const REG_V1: usize = 3;
/// Register `$a0` (first argument).
pub const REG_A0: usize = 4;
/// Register `$t0` (first temporary).
pub const REG_T0: usize = 8;
/// Register `$s0` (first saved register).
pub const REG_S0: usize = 16;
/// Register `$t8`.
pub const REG_T8: usize = 24;
/// Register `$t9`.
pub const REG_T9: usize = 25;
/// Register `$gp` (global pointer).
pub const REG_GP: usize = 28;
/// Register `$sp` (stack pointer).
pub const REG_SP: usize = 29;
/// Register `$fp` (frame pointer).
pub const REG_FP: usize = 30;
/// Register `$ra` (return address).
pub const REG_RA: usize = 31;

/// Conventional names for `$0`-`$31`.
pub const REG_NAMES: [&str; NUM_GPRS] = [
    "$zero", "$at", "$v0", "$v1", "$a0", "$a1", "$a2", "$a3", "$t0", "$t1", "$t2", "$t3", "$t4",
    "$t5", "$t6", "$t7", "$s0", "$s1", "$s2", "$s3", "$s4", "$s5", "$s6", "$s7", "$t8", "$t9",
    "$k0", "$k1", "$gp", "$sp", "$fp", "$ra",
];

/// Returns the conventional name for a register index.
///
/// Indices outside `0..32` cannot come out of a 5-bit field; they map to `"$??"`.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("$??")
}

/// Looks up a register index by name.
///
/// Accepts conventional names (`$t0`, `t0`) and numeric names (`$8`, `8`).
/// Returns `None` for anything else.
pub fn reg_index(name: &str) -> Option<usize> {
    let bare = name.strip_prefix('$').unwrap_or(name);
    if let Ok(idx) = bare.parse::<usize>() {
        return (idx < NUM_GPRS).then_some(idx);
    }
    REG_NAMES
        .iter()
        .position(|reg| reg.strip_prefix('$') == Some(bare))
}

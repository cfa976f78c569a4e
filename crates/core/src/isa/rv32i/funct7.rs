//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects alternate R-type encodings and
//! marks the multiply/divide (M) extension.

/// Default funct7 for the base encodings (ADD, SLL, SRL, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate encoding: SUB instead of ADD.
pub const SUB: u32 = 0b0100000;

/// Multiply/divide (M) extension marker (MUL, DIV, REM).
pub const M_EXTENSION: u32 = 0b0000001;

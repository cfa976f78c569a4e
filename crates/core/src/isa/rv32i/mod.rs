//! RV32I subset encoding constants.
//!
//! Groups the major opcodes and function codes recognized by the decoder.
//! Anything outside these tables is an illegal instruction.

/// funct3 values (branch conditions, ALU selectors, loads/stores).
pub mod funct3;

/// funct7 values (R-type alternate encodings and the M extension).
pub mod funct7;

/// Major opcodes (bits 6-0).
pub mod opcodes;

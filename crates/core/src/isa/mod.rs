//! Instruction set definitions and decoding.
//!
//! This module covers everything that is a property of the instruction
//! encoding rather than of the datapath:
//! 1. **Field Extraction:** Bit-level access to opcode, register, and funct fields.
//! 2. **Immediates:** Per-format immediate assembly and sign extension.
//! 3. **Constants:** Opcode and function-code values for the supported RV32I subset.

/// Immediate extraction and the field-level instruction decoder.
pub mod decode;

/// Instruction field masks and the [`InstructionBits`] extraction trait.
pub mod instruction;

/// Opcode and function-code constants for the RV32I subset.
pub mod rv32i;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};

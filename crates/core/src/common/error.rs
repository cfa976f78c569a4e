//! Fatal error definitions.
//!
//! This module defines the error taxonomy for the simulator. Every variant is
//! fatal: the scheduler propagates the first error it sees and the run ends
//! abnormally. It provides:
//! 1. **Alignment Errors:** Fetch or data access at a non-word-aligned address.
//! 2. **Decode Errors:** Unrecognized opcode, ALU function, or branch condition.
//! 3. **Load Errors:** Malformed or oversized program input.

use std::io;

use thiserror::Error;

/// A fatal simulation error.
///
/// Each variant carries the context needed to identify the offending address
/// or program line. None of these are recoverable; the simulator either runs
/// to the halt sentinel or terminates with one of these.
#[derive(Debug, Error)]
pub enum SimError {
    /// Instruction fetch from an address that is not a multiple of 4.
    #[error("misaligned instruction fetch from {addr:#010x}")]
    MisalignedFetch {
        /// The misaligned fetch address.
        addr: u32,
    },

    /// Instruction fetch beyond the end of instruction memory.
    #[error("instruction fetch out of bounds at {addr:#010x}")]
    FetchOutOfBounds {
        /// The out-of-range fetch address.
        addr: u32,
    },

    /// Unrecognized opcode, including the all-zero instruction word.
    #[error("illegal opcode {opcode:#04x} at pc={pc:#010x}")]
    IllegalOpcode {
        /// The low 7 bits of the offending instruction word.
        opcode: u32,
        /// Program counter of the offending instruction.
        pc: u32,
    },

    /// ALU function code with no defined operation.
    #[error("illegal ALU function funct3={funct3:#x} funct7={funct7:#04x} at pc={pc:#010x}")]
    IllegalAluFunct {
        /// The funct3 field of the offending instruction.
        funct3: u32,
        /// The funct7 field of the offending instruction.
        funct7: u32,
        /// Program counter of the offending instruction.
        pc: u32,
    },

    /// Branch funct3 with no defined condition.
    #[error("illegal branch condition funct3={funct3:#x} at pc={pc:#010x}")]
    IllegalBranchFunct {
        /// The funct3 field of the offending branch.
        funct3: u32,
        /// Program counter of the offending instruction.
        pc: u32,
    },

    /// Data access at an address that is not a multiple of 4.
    #[error("misaligned memory access to {addr:#010x} at pc={pc:#010x}")]
    MisalignedAccess {
        /// The misaligned effective address.
        addr: u32,
        /// Program counter of the load/store that computed it.
        pc: u32,
    },

    /// Data access beyond the end of data memory.
    #[error("memory access out of bounds at {addr:#010x} (pc={pc:#010x})")]
    AccessOutOfBounds {
        /// The out-of-range effective address.
        addr: u32,
        /// Program counter of the load/store that computed it.
        pc: u32,
    },

    /// Program line that is not a string of at most 32 binary digits.
    #[error("failed to parse program line {line}: expected a 32-bit binary encoding")]
    ProgramParse {
        /// 1-based line number of the malformed line.
        line: usize,
    },

    /// Program with more instructions than instruction memory can hold.
    #[error("program does not fit in instruction memory (line {line})")]
    ProgramTooLarge {
        /// 1-based line number of the first instruction that did not fit.
        line: usize,
    },

    /// I/O failure while reading the program input.
    #[error("failed to read program input: {0}")]
    ProgramRead(#[from] io::Error),
}

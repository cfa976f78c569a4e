//! Binary-text program loader.
//!
//! Programs arrive as text, one instruction per line, each line the 32-bit
//! encoding written in binary digits (`00000000010100000000000010010011`).
//! The loader performs:
//! 1. **Parsing:** Each non-empty line is parsed as a radix-2 `u32`.
//! 2. **Placement:** Instructions are packed contiguously from address 0,
//!    one word apart. Empty lines are skipped without advancing the load
//!    address, so blank separators never leave holes in the program.
//! 3. **Capacity Checking:** A program larger than instruction memory is
//!    rejected with the line that overflowed.

use std::io::BufRead;

use tracing::debug;

use crate::common::SimError;
use crate::common::constants::WORD_SIZE;
use crate::memory::{MemoryBuffer, WordAccess};

/// Radix of the program text encoding.
const PROGRAM_RADIX: u32 = 2;

/// Loads a program from `reader` into `imem` starting at address 0.
///
/// Returns the number of instructions loaded.
///
/// # Errors
///
/// Returns [`SimError::ProgramParse`] for a line that is not a 32-bit
/// binary integer, [`SimError::ProgramTooLarge`] when instruction memory
/// fills up, and [`SimError::ProgramRead`] for I/O failures. Line numbers
/// in errors are 1-based.
pub fn load_program<R: BufRead>(imem: &mut MemoryBuffer, reader: R) -> Result<usize, SimError> {
    let mut addr: u32 = 0;
    let mut count = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        let lineno = idx + 1;
        // from_str_radix tolerates a sign prefix; only bare binary digits
        // are a valid encoding.
        if !text.bytes().all(|b| matches!(b, b'0' | b'1')) {
            return Err(SimError::ProgramParse { line: lineno });
        }
        let word = u32::from_str_radix(text, PROGRAM_RADIX)
            .map_err(|_| SimError::ProgramParse { line: lineno })?;

        imem.write_word(addr, word).map_err(|access| match access {
            // The load address is always a word multiple, so the only
            // rejection the buffer can produce here is capacity.
            WordAccess::Misaligned | WordAccess::OutOfBounds => {
                SimError::ProgramTooLarge { line: lineno }
            }
        })?;

        addr += WORD_SIZE;
        count += 1;
    }

    debug!(instructions = count, "program loaded");
    Ok(count)
}

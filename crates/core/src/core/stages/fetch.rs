//! Instruction Fetch stage.
//!
//! Reads the 32-bit instruction word at the current PC from instruction
//! memory. The fetch address must be word-aligned and inside the
//! instruction-memory bounds; either violation is fatal.

use crate::common::SimError;
use crate::memory::{MemoryBuffer, WordAccess};

/// Fetches the instruction word at `pc`.
///
/// # Errors
///
/// Returns [`SimError::MisalignedFetch`] if `pc` is not word-aligned,
/// [`SimError::FetchOutOfBounds`] if it lies beyond instruction memory.
pub fn fetch(imem: &MemoryBuffer, pc: u32) -> Result<u32, SimError> {
    imem.read_word(pc).map_err(|access| match access {
        WordAccess::Misaligned => SimError::MisalignedFetch { addr: pc },
        WordAccess::OutOfBounds => SimError::FetchOutOfBounds { addr: pc },
    })
}

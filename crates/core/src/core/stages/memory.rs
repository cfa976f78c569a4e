//! Memory Access stage.
//!
//! Performs at most one data-memory access per cycle: a word load or a word
//! store at the effective address the ALU produced. Instructions that touch
//! no memory pass straight through with a zero load result.

use crate::common::SimError;
use crate::core::signals::ControlSignals;
use crate::memory::{DataMemory, WordAccess};

/// Runs the memory stage, returning the loaded word (0 when not a load).
///
/// # Arguments
///
/// * `dmem` - The data memory.
/// * `ctrl` - This cycle's control signals.
/// * `addr` - Effective address from the ALU.
/// * `store_val` - The `rs2` value, written on a store.
/// * `pc` - Current PC, carried into errors.
///
/// # Errors
///
/// Returns [`SimError::MisalignedAccess`] or [`SimError::AccessOutOfBounds`]
/// when the effective address fails the buffer's checks.
pub fn access(
    dmem: &mut DataMemory,
    ctrl: &ControlSignals,
    addr: u32,
    store_val: u32,
    pc: u32,
) -> Result<u32, SimError> {
    if ctrl.mem_read {
        return dmem.load_word(addr).map_err(|e| data_error(e, addr, pc));
    }
    if ctrl.mem_write {
        dmem.store_word(addr, store_val)
            .map_err(|e| data_error(e, addr, pc))?;
    }
    Ok(0)
}

fn data_error(access: WordAccess, addr: u32, pc: u32) -> SimError {
    match access {
        WordAccess::Misaligned => SimError::MisalignedAccess { addr, pc },
        WordAccess::OutOfBounds => SimError::AccessOutOfBounds { addr, pc },
    }
}

//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator:
//! 1. **Datapath Constants:** Word size and register file geometry.
//! 2. **Halt Protocol:** The sentinel register and value that end a run.

/// Size of one machine word (and one instruction) in bytes.
///
/// Every instruction fetch and every data access operates on exactly one
/// word; all addresses must be a multiple of this value.
pub const WORD_SIZE: u32 = 4;

/// Number of general-purpose registers (`x0`-`x31`).
pub const NUM_REGISTERS: usize = 32;

/// Register whose contents are checked for the halt sentinel (`x31`).
pub const HALT_REGISTER: usize = 31;

/// Sentinel value that terminates execution when observed in `x31`.
///
/// The check happens at the top of each cycle, so the instruction that
/// writes the sentinel still retires fully.
pub const HALT_SENTINEL: u32 = 0xDEAD_BEEF;

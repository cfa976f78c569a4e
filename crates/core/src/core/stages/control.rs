//! Control-unit PC update.
//!
//! The last step of the cycle: choose the next PC. Sequential flow takes
//! `pc + 4`; jumps and taken branches take the target the ALU computed.

use crate::common::constants::WORD_SIZE;
use crate::core::signals::ControlSignals;

/// Computes the next program counter.
pub fn next_pc(ctrl: &ControlSignals, pc: u32, target: u32) -> u32 {
    if ctrl.pc_from_target {
        target
    } else {
        pc.wrapping_add(WORD_SIZE)
    }
}

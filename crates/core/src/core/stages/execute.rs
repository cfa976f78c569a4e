//! Execute stage.
//!
//! Selects the two ALU operands per the control signals, runs the ALU, and
//! resolves any branch. A taken branch flips `pc_from_target` so the control
//! unit redirects the PC to the ALU result (which, for branches, is the
//! `pc + offset` target).

use crate::core::signals::{ControlSignals, OpASrc, OpBSrc};
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::Decoded;

/// Runs the execute stage, returning the ALU result.
///
/// Mutates `ctrl.pc_from_target` when a branch condition holds; all other
/// control signals pass through untouched.
pub fn execute(d: &Decoded, rv1: u32, rv2: u32, pc: u32, ctrl: &mut ControlSignals) -> u32 {
    let a = match ctrl.a_src {
        OpASrc::Reg1 => rv1,
        OpASrc::Pc => pc,
    };
    let b = match ctrl.b_src {
        OpBSrc::Reg2 => rv2,
        OpBSrc::Imm => d.imm as u32,
    };

    if let Some(cond) = ctrl.branch {
        if Bru::resolve(cond, ctrl.branch_unsigned, rv1, rv2) {
            ctrl.pc_from_target = true;
        }
    }

    Alu::execute(ctrl.alu, a, b)
}

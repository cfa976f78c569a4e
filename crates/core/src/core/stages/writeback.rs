//! Write-Back stage.
//!
//! Commits at most one register write per cycle, selected by the write-back
//! control signal. The register file drops writes to `x0`, so this stage
//! never special-cases the zero register.

use crate::common::constants::WORD_SIZE;
use crate::core::arch::Gpr;
use crate::core::signals::{ControlSignals, WbSel};

/// Runs the write-back stage.
///
/// # Arguments
///
/// * `regs` - The register file.
/// * `ctrl` - This cycle's control signals.
/// * `rd` - Destination register index.
/// * `alu_out` - The ALU result.
/// * `mem_out` - The loaded word from the memory stage.
/// * `pc` - PC of the instruction, for the `pc + 4` linkage value.
pub fn writeback(
    regs: &mut Gpr,
    ctrl: &ControlSignals,
    rd: usize,
    alu_out: u32,
    mem_out: u32,
    pc: u32,
) {
    match ctrl.wb {
        WbSel::None => {}
        WbSel::Alu => regs.write(rd, alu_out),
        WbSel::Mem => regs.write(rd, mem_out),
        WbSel::PcPlus4 => regs.write(rd, pc.wrapping_add(WORD_SIZE)),
    }
}

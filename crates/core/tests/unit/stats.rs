//! Instruction-Mix Classification Tests.

use rv32sim_core::core::signals::{BranchCond, ControlSignals, WbSel};
use rv32sim_core::stats::SimStats;

#[test]
fn plain_alu_instruction_counts_as_alu() {
    let mut stats = SimStats::new();
    stats.record(&ControlSignals {
        wb: WbSel::Alu,
        ..ControlSignals::default()
    });
    assert_eq!(stats.inst_alu, 1);
    assert_eq!(stats.total(), 1);
}

#[test]
fn loads_and_stores_classify_by_memory_signal() {
    let mut stats = SimStats::new();
    stats.record(&ControlSignals {
        mem_read: true,
        wb: WbSel::Mem,
        ..ControlSignals::default()
    });
    stats.record(&ControlSignals {
        mem_write: true,
        ..ControlSignals::default()
    });
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_alu, 0);
}

#[test]
fn branches_and_jumps_classify_as_branch() {
    let mut stats = SimStats::new();
    // Conditional branch, taken or not.
    stats.record(&ControlSignals {
        branch: Some(BranchCond::Eq),
        ..ControlSignals::default()
    });
    // Jump with linkage.
    stats.record(&ControlSignals {
        wb: WbSel::PcPlus4,
        pc_from_target: true,
        ..ControlSignals::default()
    });
    assert_eq!(stats.inst_branch, 2);
    assert_eq!(stats.total(), 2);
}

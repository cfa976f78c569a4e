//! Execution statistics.
//!
//! Counts retired instructions by category. Classification is derived from
//! the cycle's control signals, so it costs nothing beyond the work the
//! datapath already did. Reporting only; never consulted by the datapath.

use crate::core::signals::{ControlSignals, WbSel};

/// Instruction-mix counters for one run.
#[derive(Clone, Debug, Default)]
pub struct SimStats {
    /// Retired ALU-class instructions (register, immediate, LUI, AUIPC).
    pub inst_alu: u64,

    /// Retired loads.
    pub inst_load: u64,

    /// Retired stores.
    pub inst_store: u64,

    /// Retired control-flow instructions (branches, JAL, JALR).
    pub inst_branch: u64,
}

impl SimStats {
    /// Creates a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one retired instruction, classified from its control signals.
    pub fn record(&mut self, ctrl: &ControlSignals) {
        if ctrl.mem_read {
            self.inst_load += 1;
        } else if ctrl.mem_write {
            self.inst_store += 1;
        } else if ctrl.branch.is_some() || ctrl.wb == WbSel::PcPlus4 {
            self.inst_branch += 1;
        } else {
            self.inst_alu += 1;
        }
    }

    /// Total retired instructions across all categories.
    pub fn total(&self) -> u64 {
        self.inst_alu + self.inst_load + self.inst_store + self.inst_branch
    }

    /// Prints the instruction mix to stdout.
    pub fn print(&self) {
        println!("Instructions retired: {}", self.total());
        println!("  alu:    {}", self.inst_alu);
        println!("  load:   {}", self.inst_load);
        println!("  store:  {}", self.inst_store);
        println!("  branch: {}", self.inst_branch);
    }
}

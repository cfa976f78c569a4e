//! The single-cycle processor core.
//!
//! This module owns the architectural state and the cycle scheduler. Each
//! call to [`Processor::step`] drives one instruction through all six
//! datapath stages and advances the clock by exactly one. [`Processor::run`]
//! repeats that until the halt sentinel appears in `x31`, checking at the
//! top of every cycle so a preloaded sentinel halts before anything fetches.

/// Architectural register state.
pub mod arch;

/// Per-cycle control signals and selectors.
pub mod signals;

/// Datapath stages.
pub mod stages;

/// Combinational execution units.
pub mod units;

use tracing::trace;

use crate::common::SimError;
use crate::common::constants::{HALT_REGISTER, HALT_SENTINEL};
use crate::config::Config;
use crate::core::arch::Gpr;
use crate::memory::{DataMemory, MemoryBuffer};
use crate::sim::loader;
use crate::stats::SimStats;

/// A single-cycle RV32I processor.
///
/// Owns the register file, both memories, the program counter, and the
/// cycle counter. Built from a [`Config`], loaded via
/// [`load_program`](Processor::load_program), and driven by
/// [`run`](Processor::run) or stepped one cycle at a time.
pub struct Processor {
    /// Cycles elapsed since reset.
    pub clock: u64,

    /// Program counter.
    pub pc: u32,

    /// General-purpose register file.
    pub regs: Gpr,

    /// Instruction memory. Written only by the loader.
    pub imem: MemoryBuffer,

    /// Data memory with touched-byte tracking.
    pub dmem: DataMemory,

    /// Instruction-mix counters.
    pub stats: SimStats,
}

impl Processor {
    /// Creates a processor at reset state from `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            clock: 0,
            pc: config.start_pc,
            regs: Gpr::new(),
            imem: MemoryBuffer::new(config.imem_size),
            dmem: DataMemory::new(config.dmem_size),
            stats: SimStats::new(),
        }
    }

    /// Loads a binary-text program into instruction memory starting at
    /// address 0.
    ///
    /// # Errors
    ///
    /// Propagates parse, capacity, and I/O failures from the loader.
    pub fn load_program<R: std::io::BufRead>(&mut self, reader: R) -> Result<usize, SimError> {
        loader::load_program(&mut self.imem, reader)
    }

    /// Returns whether the halt sentinel is present in the halt register.
    pub fn halted(&self) -> bool {
        self.regs.read(HALT_REGISTER) == HALT_SENTINEL
    }

    /// Executes one full cycle: fetch, decode, execute, memory, write-back,
    /// PC update. The clock advances only once the instruction has fully
    /// retired, so it always equals the retired-instruction count.
    ///
    /// # Errors
    ///
    /// Propagates the first stage error; a faulted cycle leaves the clock
    /// untouched.
    pub fn step(&mut self) -> Result<(), SimError> {
        let inst = stages::fetch::fetch(&self.imem, self.pc)?;
        let stages::decode::IdResult {
            d,
            rv1,
            rv2,
            mut ctrl,
        } = stages::decode::decode_stage(inst, self.pc, &self.regs)?;
        let alu_out = stages::execute::execute(&d, rv1, rv2, self.pc, &mut ctrl);
        let mem_out = stages::memory::access(&mut self.dmem, &ctrl, alu_out, rv2, self.pc)?;
        stages::writeback::writeback(&mut self.regs, &ctrl, d.rd, alu_out, mem_out, self.pc);

        self.clock += 1;
        self.stats.record(&ctrl);
        trace!(clock = self.clock, pc = self.pc, inst, alu_out, "retired");

        self.pc = stages::control::next_pc(&ctrl, self.pc, alu_out);
        Ok(())
    }

    /// Runs until the halt sentinel appears in `x31`.
    ///
    /// The halt check happens at the top of every cycle, so a program (or
    /// caller) that has already planted the sentinel executes nothing.
    ///
    /// # Errors
    ///
    /// Propagates the first cycle error.
    pub fn run(&mut self) -> Result<(), SimError> {
        while !self.halted() {
            self.step()?;
        }
        Ok(())
    }

    /// Prints the elapsed clock cycles to stdout.
    pub fn print_statistics(&self) {
        println!("Processor's clock cycles: {}", self.clock);
    }

    /// Dumps the PC and all registers to stdout.
    pub fn dump_registers(&self) {
        println!(">>>>>>>>[REGISTER DUMP]<<<<<<<");
        println!("PC: = {}", self.pc);
        self.regs.dump();
        println!(">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>");
    }

    /// Dumps every touched data-memory byte to stdout as `hex-offset : value`.
    pub fn dump_memory(&self) {
        println!(">>>>>>>>[MEMORY DUMP]<<<<<<<<<");
        for (offset, value) in self.dmem.touched_bytes() {
            println!("{offset:x} : {value}");
        }
        println!(">>>>>>>>>>>>>>>>>>>>>>>>>>>>>>");
    }
}

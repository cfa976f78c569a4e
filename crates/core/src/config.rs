//! Configuration for the RV32I simulator.
//!
//! This module defines the parameters a `Processor` is built from. It provides:
//! 1. **Defaults:** Baseline memory geometry and reset state.
//! 2. **Structure:** A flat config consumed by [`Processor::new`].
//!
//! [`Processor::new`]: crate::core::Processor::new

/// Default configuration constants for the simulator.
///
/// These values define the baseline hardware configuration when not
/// explicitly overridden by the caller.
mod defaults {
    /// Instruction memory capacity in bytes (32 KiB).
    pub const IMEM_SIZE: usize = 32 * 1024;

    /// Data memory capacity in bytes (32 KiB).
    ///
    /// Deliberately its own constant: data memory is sized independently of
    /// instruction memory even though the defaults coincide.
    pub const DMEM_SIZE: usize = 32 * 1024;

    /// Program counter value at reset. The program segment starts at 0.
    pub const START_PC: u32 = 0;
}

/// Simulator configuration.
///
/// Construct with [`Config::default`] and override fields as needed.
#[derive(Clone, Debug)]
pub struct Config {
    /// Instruction memory capacity in bytes. Written only during program
    /// load; read-only afterwards.
    pub imem_size: usize,

    /// Data memory capacity in bytes. Independent of `imem_size`.
    pub dmem_size: usize,

    /// Initial program counter.
    pub start_pc: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            imem_size: defaults::IMEM_SIZE,
            dmem_size: defaults::DMEM_SIZE,
            start_pc: defaults::START_PC,
        }
    }
}

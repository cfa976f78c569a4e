//! A single-cycle RV32I instruction-set simulator.
//!
//! This crate models a classic five-stage datapath executed entirely within
//! one clock cycle per instruction. It is organized as:
//! 1. **`isa`:** Bit-level instruction decoding — field extraction, immediate
//!    assembly, opcode and function-code constants.
//! 2. **`core`:** The processor — register file, control signals, execution
//!    units, the six datapath stages, and the cycle scheduler.
//! 3. **`memory`:** Word-addressed instruction and data memories with
//!    alignment and bounds checking.
//! 4. **`sim`:** The binary-text program loader.
//! 5. **`stats`:** Instruction-mix counters for the run report.
//!
//! A program runs until it writes the sentinel `0xDEADBEEF` into `x31`; any
//! fault (illegal encoding, misaligned or out-of-range access) terminates
//! the run with a [`SimError`] instead.
//!
//! # Example
//!
//! ```
//! use rv32sim_core::{Config, Processor};
//!
//! // addi x5, x0, 1; lui x31, 0xDEADC; addi x31, x31, -273
//! let program = "00000000000100000000001010010011\n\
//!                11011110101011011100111110110111\n\
//!                11101110111111111000111110010011";
//! let mut cpu = Processor::new(&Config::default());
//! cpu.load_program(program.as_bytes())?;
//! cpu.run()?;
//! assert_eq!(cpu.regs.read(5), 1);
//! # Ok::<(), rv32sim_core::SimError>(())
//! ```

/// Shared constants and the error taxonomy.
pub mod common;

/// Simulator configuration.
pub mod config;

/// The processor core: registers, signals, units, stages, scheduler.
pub mod core;

/// Instruction set definitions and decoding.
pub mod isa;

/// Instruction and data memories.
pub mod memory;

/// Program loading.
pub mod sim;

/// Execution statistics.
pub mod stats;

pub use common::SimError;
pub use config::Config;
pub use core::Processor;

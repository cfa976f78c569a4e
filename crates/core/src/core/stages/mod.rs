//! Datapath stages.
//!
//! One instruction passes through all six stages within a single cycle:
//! fetch, decode, execute, memory, write-back, then the control-unit PC
//! update. Each stage is a free function over the state it needs, and all
//! inter-stage values travel explicitly through the scheduler.

/// Instruction fetch.
pub mod fetch;

/// Instruction decode and control derivation.
pub mod decode;

/// Operand selection, ALU dispatch, branch resolution.
pub mod execute;

/// Data-memory access.
pub mod memory;

/// Register write-back.
pub mod writeback;

/// Control-unit PC update.
pub mod control;

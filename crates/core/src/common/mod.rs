//! Common utilities and types used throughout the RV32I simulator.
//!
//! This module provides fundamental building blocks that are shared across all
//! components of the simulator. It includes:
//! 1. **Constants:** System-wide constants for memory, registers, and the halt protocol.
//! 2. **Error Handling:** The closed error taxonomy for fatal simulation failures.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for fatal simulation failures.
pub mod error;

pub use constants::{HALT_REGISTER, HALT_SENTINEL, NUM_REGISTERS, WORD_SIZE};
pub use error::SimError;

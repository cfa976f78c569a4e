//! # Unit Components
//!
//! This module serves as the central hub for the unit tests of the
//! simulator. It organizes tests for the processor core, ISA decoding,
//! the memories, the loader, and the statistics counters.





/// Unit tests for instruction-mix classification.
pub mod stats;

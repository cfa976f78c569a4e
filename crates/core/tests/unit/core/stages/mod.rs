

/// Execute stage tests.
pub mod execute;

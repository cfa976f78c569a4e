//! Program loading.

/// Binary-text program loader.
pub mod loader;

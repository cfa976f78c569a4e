//! RISC-V General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs
//! the following:
//! 1. **Storage:** Maintains 32 integer registers (`x0`-`x31`).
//! 2. **Invariant Enforcement:** Keeps `x0` at zero by refusing writes to it.
//!    Reads are not masked; the invariant holds because nothing ever sets it.
//! 3. **Debugging:** Provides a signed-decimal dump of the complete register state.

use crate::common::constants::NUM_REGISTERS;

/// General-Purpose Register file.
///
/// Contains 32 registers of 32 bits each. Register `x0` is hardwired to zero:
/// writes to index 0 are dropped in [`write`](Gpr::write).
pub struct Gpr {
    regs: [u32; NUM_REGISTERS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGISTERS],
        }
    }

    /// Reads a register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31). `x0` reads 0 because it is never written.
    pub fn read(&self, idx: usize) -> u32 {
        self.regs[idx]
    }

    /// Writes a value to a register. Writes to `x0` are ignored.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    /// * `val` - The 32-bit value to write.
    pub fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Dumps all registers to stdout as signed decimals, one per line.
    pub fn dump(&self) {
        for (i, &value) in self.regs.iter().enumerate() {
            println!("x{:02} = {}", i, value as i32);
        }
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

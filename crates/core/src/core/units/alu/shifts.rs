//! Shift operations.
//!
//! The shift amount is the low five bits of operand B; higher bits are
//! ignored, as the hardware shifter only sees a 5-bit amount.

/// Mask selecting the 5-bit shift amount.
const SHAMT_MASK: u32 = 0x1F;

/// Shift left logical.
pub fn sll(a: u32, b: u32) -> u32 {
    a << (b & SHAMT_MASK)
}

/// Shift right logical.
pub fn srl(a: u32, b: u32) -> u32 {
    a >> (b & SHAMT_MASK)
}

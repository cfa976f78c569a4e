//! Bitwise logic operations.

/// Bitwise XOR.
pub fn xor(a: u32, b: u32) -> u32 {
    a ^ b
}

/// Bitwise OR.
pub fn or(a: u32, b: u32) -> u32 {
    a | b
}

/// Bitwise AND.
pub fn and(a: u32, b: u32) -> u32 {
    a & b
}

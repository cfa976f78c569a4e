//! Arithmetic operations: add, sub, and the signed multiply/divide family.

/// Wrapping 32-bit addition.
pub fn add(a: u32, b: u32) -> u32 {
    a.wrapping_add(b)
}

/// Wrapping 32-bit subtraction.
pub fn sub(a: u32, b: u32) -> u32 {
    a.wrapping_sub(b)
}

/// Signed 32-bit multiply, low word of the product.
pub fn mul(a: u32, b: u32) -> u32 {
    (a as i32).wrapping_mul(b as i32) as u32
}

/// Signed 32-bit division.
///
/// Division by zero yields all-ones (-1); overflow (`i32::MIN / -1`) wraps
/// back to `i32::MIN`. No trap in either case.
pub fn div(a: u32, b: u32) -> u32 {
    let (a, b) = (a as i32, b as i32);
    if b == 0 {
        u32::MAX
    } else {
        a.wrapping_div(b) as u32
    }
}

/// Signed 32-bit remainder.
///
/// Remainder by zero yields the dividend; overflow (`i32::MIN % -1`) yields 0.
pub fn rem(a: u32, b: u32) -> u32 {
    let (a, b) = (a as i32, b as i32);
    if b == 0 {
        a as u32
    } else {
        a.wrapping_rem(b) as u32
    }
}

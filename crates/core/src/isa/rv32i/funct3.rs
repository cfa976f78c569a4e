//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) distinguishes between instructions sharing
//! the same major opcode (e.g., BEQ vs BNE, ADD vs XOR).

/// Branch Equal.
pub const BEQ: u32 = 0b000;
/// Branch Not Equal.
pub const BNE: u32 = 0b001;
/// Branch Less Than (signed).
pub const BLT: u32 = 0b100;
/// Branch Greater or Equal (signed).
pub const BGE: u32 = 0b101;
/// Branch Less Than Unsigned.
pub const BLTU: u32 = 0b110;
/// Branch Greater or Equal Unsigned.
pub const BGEU: u32 = 0b111;

/// Bit of `funct3` that selects the unsigned compare domain for branches.
pub const BRANCH_UNSIGNED_BIT: u32 = 0b010;

/// Add (and Subtract, selected by funct7). Also MUL under the M extension.
pub const ADD_SUB: u32 = 0b000;
/// Shift Left Logical.
pub const SLL: u32 = 0b001;
/// Bitwise XOR. Also DIV under the M extension.
pub const XOR: u32 = 0b100;
/// Shift Right Logical.
pub const SRL: u32 = 0b101;
/// Bitwise OR. Also REM under the M extension.
pub const OR: u32 = 0b110;
/// Bitwise AND.
pub const AND: u32 = 0b111;

//! Arithmetic Logic Unit.
//!
//! The ALU performs all computation in the datapath: register arithmetic and
//! logic, address generation for loads and stores, branch and jump targets,
//! and the upper-immediate adds. Every operation is dispatched through the
//! closed [`AluOp`] selector, so there is no illegal-operation path at this
//! level; decode already rejected anything unrepresentable.
//!
//! All arithmetic wraps on overflow, matching two's-complement hardware.

mod arithmetic;
mod logic;
mod shifts;

use crate::core::signals::AluOp;

/// The Arithmetic Logic Unit.
///
/// Stateless; dispatch lives in [`execute`](Alu::execute).
pub struct Alu;

impl Alu {
    /// Executes the selected operation on two 32-bit operands.
    ///
    /// # Arguments
    ///
    /// * `op` - The operation selector.
    /// * `a` - Operand A (register value or PC).
    /// * `b` - Operand B (register value or immediate).
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => arithmetic::add(a, b),
            AluOp::Sub => arithmetic::sub(a, b),
            AluOp::Mul => arithmetic::mul(a, b),
            AluOp::Div => arithmetic::div(a, b),
            AluOp::Rem => arithmetic::rem(a, b),
            AluOp::Xor => logic::xor(a, b),
            AluOp::Or => logic::or(a, b),
            AluOp::And => logic::and(a, b),
            AluOp::Sll => shifts::sll(a, b),
            AluOp::Srl => shifts::srl(a, b),
        }
    }
}

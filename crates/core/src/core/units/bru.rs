//! Branch Resolution Unit.
//!
//! Evaluates a branch condition over the two register operands. The
//! comparison domain (signed vs. unsigned) is a separate control line, so
//! `Lt`/`Ge` serve both BLT/BGE and BLTU/BGEU.

use crate::core::signals::BranchCond;

/// The Branch Resolution Unit.
pub struct Bru;

impl Bru {
    /// Returns whether the branch condition holds for operands `a` and `b`.
    ///
    /// # Arguments
    ///
    /// * `cond` - The condition to evaluate.
    /// * `unsigned` - Compare in the unsigned domain (BLTU/BGEU).
    /// * `a` - The `rs1` register value.
    /// * `b` - The `rs2` register value.
    pub fn resolve(cond: BranchCond, unsigned: bool, a: u32, b: u32) -> bool {
        match cond {
            BranchCond::Eq => a == b,
            BranchCond::Ne => a != b,
            BranchCond::Lt => {
                if unsigned {
                    a < b
                } else {
                    (a as i32) < (b as i32)
                }
            }
            BranchCond::Ge => {
                if unsigned {
                    a >= b
                } else {
                    (a as i32) >= (b as i32)
                }
            }
        }
    }
}

//! Branch Resolution Tests.
//!
//! Covers each condition in both compare domains; the signed/unsigned
//! split matters exactly when one operand has bit 31 set.

use rstest::rstest;

use rv32sim_core::core::signals::BranchCond;
use rv32sim_core::core::units::bru::Bru;

const NEG1: u32 = -1i32 as u32;

#[rstest]
#[case(BranchCond::Eq, 5, 5, true)]
#[case(BranchCond::Eq, 5, 6, false)]
#[case(BranchCond::Ne, 5, 6, true)]
#[case(BranchCond::Ne, 5, 5, false)]
fn equality_ignores_domain(
    #[case] cond: BranchCond,
    #[case] a: u32,
    #[case] b: u32,
    #[case] expect: bool,
) {
    assert_eq!(Bru::resolve(cond, false, a, b), expect);
    assert_eq!(Bru::resolve(cond, true, a, b), expect);
}

#[test]
fn lt_signed_treats_high_bit_as_negative() {
    // -1 < 1 signed, but 0xFFFF_FFFF > 1 unsigned.
    assert!(Bru::resolve(BranchCond::Lt, false, NEG1, 1));
    assert!(!Bru::resolve(BranchCond::Lt, true, NEG1, 1));
}

#[test]
fn ge_signed_vs_unsigned() {
    assert!(!Bru::resolve(BranchCond::Ge, false, NEG1, 0));
    assert!(Bru::resolve(BranchCond::Ge, true, NEG1, 0));
}

#[test]
fn lt_strict_and_ge_inclusive() {
    assert!(!Bru::resolve(BranchCond::Lt, false, 5, 5));
    assert!(Bru::resolve(BranchCond::Ge, false, 5, 5));
    assert!(!Bru::resolve(BranchCond::Lt, true, 5, 5));
    assert!(Bru::resolve(BranchCond::Ge, true, 5, 5));
}

#[test]
fn signed_boundaries() {
    let min = i32::MIN as u32;
    let max = i32::MAX as u32;
    assert!(Bru::resolve(BranchCond::Lt, false, min, max));
    assert!(!Bru::resolve(BranchCond::Lt, true, min, max));
}

//! Execute Stage Tests.
//!
//! Operand selection, branch resolution, and the PC update that follows.

use rv32sim_core::core::signals::{
    AluOp, BranchCond, ControlSignals, OpASrc, OpBSrc,
};
use rv32sim_core::core::stages::{control, execute::execute};
use rv32sim_core::isa::Decoded;

fn decoded_with_imm(imm: i32) -> Decoded {
    Decoded {
        imm,
        ..Decoded::default()
    }
}

#[test]
fn register_register_operands() {
    let d = Decoded::default();
    let mut ctrl = ControlSignals {
        alu: AluOp::Add,
        ..ControlSignals::default()
    };
    assert_eq!(execute(&d, 5, 7, 0, &mut ctrl), 12);
}

#[test]
fn immediate_replaces_operand_b() {
    let d = decoded_with_imm(-3);
    let mut ctrl = ControlSignals {
        b_src: OpBSrc::Imm,
        ..ControlSignals::default()
    };
    // 10 + (-3), rv2 ignored.
    assert_eq!(execute(&d, 10, 999, 0, &mut ctrl), 7);
}

#[test]
fn pc_replaces_operand_a() {
    let d = decoded_with_imm(0x1000);
    let mut ctrl = ControlSignals {
        a_src: OpASrc::Pc,
        b_src: OpBSrc::Imm,
        ..ControlSignals::default()
    };
    // AUIPC shape: pc + imm, registers ignored.
    assert_eq!(execute(&d, 999, 999, 0x80, &mut ctrl), 0x1080);
}

#[test]
fn taken_branch_redirects_pc() {
    let d = decoded_with_imm(8);
    let mut ctrl = ControlSignals {
        a_src: OpASrc::Pc,
        b_src: OpBSrc::Imm,
        branch: Some(BranchCond::Eq),
        ..ControlSignals::default()
    };

    let target = execute(&d, 5, 5, 0x40, &mut ctrl);
    assert_eq!(target, 0x48);
    assert!(ctrl.pc_from_target);
    assert_eq!(control::next_pc(&ctrl, 0x40, target), 0x48);
}

#[test]
fn not_taken_branch_falls_through() {
    let d = decoded_with_imm(8);
    let mut ctrl = ControlSignals {
        a_src: OpASrc::Pc,
        b_src: OpBSrc::Imm,
        branch: Some(BranchCond::Eq),
        ..ControlSignals::default()
    };

    let target = execute(&d, 5, 6, 0x40, &mut ctrl);
    assert!(!ctrl.pc_from_target);
    assert_eq!(control::next_pc(&ctrl, 0x40, target), 0x44);
}

#[test]
fn branch_compares_registers_not_selected_operands() {
    // The branch target comes from PC + imm, but the condition must use the
    // register values even though neither feeds the ALU.
    let d = decoded_with_imm(-8);
    let mut ctrl = ControlSignals {
        a_src: OpASrc::Pc,
        b_src: OpBSrc::Imm,
        branch: Some(BranchCond::Lt),
        ..ControlSignals::default()
    };

    let target = execute(&d, 1, 2, 0x40, &mut ctrl);
    assert!(ctrl.pc_from_target);
    assert_eq!(target, 0x38);
}

#[test]
fn unsigned_branch_uses_unsigned_domain() {
    let d = decoded_with_imm(8);
    let mut ctrl = ControlSignals {
        a_src: OpASrc::Pc,
        b_src: OpBSrc::Imm,
        branch: Some(BranchCond::Lt),
        branch_unsigned: true,
        ..ControlSignals::default()
    };

    // 0xFFFF_FFFF is large unsigned, so BLTU does not take.
    execute(&d, u32::MAX, 1, 0, &mut ctrl);
    assert!(!ctrl.pc_from_target);
}

#[test]
fn jump_target_passes_straight_through() {
    // JALR shape: target = rs1 + imm, pc_from_target preset at decode.
    let d = decoded_with_imm(4);
    let mut ctrl = ControlSignals {
        b_src: OpBSrc::Imm,
        pc_from_target: true,
        ..ControlSignals::default()
    };

    let target = execute(&d, 0x100, 0, 0x40, &mut ctrl);
    assert_eq!(control::next_pc(&ctrl, 0x40, target), 0x104);
}

#[test]
fn sequential_next_pc_wraps() {
    let ctrl = ControlSignals::default();
    assert_eq!(control::next_pc(&ctrl, u32::MAX - 3, 0), 0);
}

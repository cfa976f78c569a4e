//! Instruction Decode stage.
//!
//! This stage turns a fetched instruction word into everything execute needs:
//! 1. **Field Extraction:** Splits the word into its encoded fields via the
//!    bit-level decoder.
//! 2. **Register Read:** Reads the source registers the format actually
//!    names. U- and J-type encodings carry immediate bits where `rs1`/`rs2`
//!    would sit, so their operand values stay zero.
//! 3. **Control Derivation:** Builds a fresh [`ControlSignals`] value from
//!    the opcode and function codes, rejecting anything the datapath cannot
//!    execute.

use crate::common::SimError;
use crate::core::arch::Gpr;
use crate::core::signals::{AluOp, BranchCond, ControlSignals, OpASrc, OpBSrc, WbSel};
use crate::isa::rv32i::{funct3, funct7, opcodes};
use crate::isa::{Decoded, decode};

/// Output of the decode stage: decoded fields, operand values, and the
/// control signals for the rest of the cycle.
#[derive(Debug)]
pub struct IdResult {
    /// Decoded instruction fields.
    pub d: Decoded,

    /// Value of the `rs1` register, or 0 if the format has no `rs1`.
    pub rv1: u32,

    /// Value of the `rs2` register, or 0 if the format has no `rs2`.
    pub rv2: u32,

    /// Control signals derived from the opcode and function codes.
    pub ctrl: ControlSignals,
}

/// Decodes `inst` and derives the cycle's control signals.
///
/// # Errors
///
/// Returns [`SimError::IllegalOpcode`] for an unrecognized opcode,
/// [`SimError::IllegalAluFunct`] for an undefined register-ALU function
/// code, and [`SimError::IllegalBranchFunct`] for an undefined branch
/// condition. `pc` is carried into each error for diagnostics.
pub fn decode_stage(inst: u32, pc: u32, regs: &Gpr) -> Result<IdResult, SimError> {
    let d = decode(inst);
    let mut ctrl = ControlSignals::default();

    match d.opcode {
        opcodes::OP_LOAD => {
            ctrl.wb = WbSel::Mem;
            ctrl.b_src = OpBSrc::Imm;
            ctrl.mem_read = true;
        }
        opcodes::OP_IMM => {
            ctrl.wb = WbSel::Alu;
            ctrl.b_src = OpBSrc::Imm;
            ctrl.alu = imm_alu_op(&d, pc)?;
        }
        opcodes::OP_AUIPC => {
            ctrl.wb = WbSel::Alu;
            ctrl.a_src = OpASrc::Pc;
            ctrl.b_src = OpBSrc::Imm;
        }
        opcodes::OP_STORE => {
            ctrl.b_src = OpBSrc::Imm;
            ctrl.mem_write = true;
        }
        opcodes::OP_REG => {
            ctrl.wb = WbSel::Alu;
            ctrl.alu = reg_alu_op(&d, pc)?;
        }
        opcodes::OP_LUI => {
            // Operand A reads rs1, but the register file is never consulted
            // for U-type; the ALU computes 0 + imm.
            ctrl.wb = WbSel::Alu;
            ctrl.b_src = OpBSrc::Imm;
        }
        opcodes::OP_BRANCH => {
            ctrl.a_src = OpASrc::Pc;
            ctrl.b_src = OpBSrc::Imm;
            ctrl.branch = Some(branch_cond(&d, pc)?);
            ctrl.branch_unsigned = d.funct3 & funct3::BRANCH_UNSIGNED_BIT != 0;
        }
        opcodes::OP_JALR => {
            ctrl.wb = WbSel::PcPlus4;
            ctrl.pc_from_target = true;
            ctrl.b_src = OpBSrc::Imm;
        }
        opcodes::OP_JAL => {
            ctrl.wb = WbSel::PcPlus4;
            ctrl.pc_from_target = true;
            ctrl.a_src = OpASrc::Pc;
            ctrl.b_src = OpBSrc::Imm;
        }
        opcode => return Err(SimError::IllegalOpcode { opcode, pc }),
    }

    let (rv1, rv2) = read_operands(&d, regs);

    Ok(IdResult { d, rv1, rv2, ctrl })
}

/// Reads the source-register values the instruction format names.
fn read_operands(d: &Decoded, regs: &Gpr) -> (u32, u32) {
    let rv1 = match d.opcode {
        opcodes::OP_LOAD
        | opcodes::OP_IMM
        | opcodes::OP_STORE
        | opcodes::OP_REG
        | opcodes::OP_BRANCH
        | opcodes::OP_JALR => regs.read(d.rs1),
        _ => 0,
    };
    let rv2 = match d.opcode {
        opcodes::OP_STORE | opcodes::OP_REG | opcodes::OP_BRANCH => regs.read(d.rs2),
        _ => 0,
    };
    (rv1, rv2)
}

/// Maps an immediate-arithmetic funct3 onto an ALU operation.
fn imm_alu_op(d: &Decoded, pc: u32) -> Result<AluOp, SimError> {
    match d.funct3 {
        funct3::ADD_SUB => Ok(AluOp::Add),
        funct3::SLL => Ok(AluOp::Sll),
        funct3::XOR => Ok(AluOp::Xor),
        funct3::SRL => Ok(AluOp::Srl),
        funct3::OR => Ok(AluOp::Or),
        funct3::AND => Ok(AluOp::And),
        _ => Err(SimError::IllegalAluFunct {
            funct3: d.funct3,
            funct7: d.funct7,
            pc,
        }),
    }
}

/// Maps a register-arithmetic funct3/funct7 pair onto an ALU operation.
fn reg_alu_op(d: &Decoded, pc: u32) -> Result<AluOp, SimError> {
    let op = match (d.funct3, d.funct7) {
        (funct3::ADD_SUB, funct7::DEFAULT) => AluOp::Add,
        (funct3::ADD_SUB, funct7::SUB) => AluOp::Sub,
        (funct3::ADD_SUB, funct7::M_EXTENSION) => AluOp::Mul,
        (funct3::SLL, funct7::DEFAULT) => AluOp::Sll,
        (funct3::XOR, funct7::DEFAULT) => AluOp::Xor,
        (funct3::XOR, funct7::M_EXTENSION) => AluOp::Div,
        (funct3::SRL, funct7::DEFAULT) => AluOp::Srl,
        (funct3::OR, funct7::DEFAULT) => AluOp::Or,
        (funct3::OR, funct7::M_EXTENSION) => AluOp::Rem,
        (funct3::AND, funct7::DEFAULT) => AluOp::And,
        _ => {
            return Err(SimError::IllegalAluFunct {
                funct3: d.funct3,
                funct7: d.funct7,
                pc,
            });
        }
    };
    Ok(op)
}

/// Maps a branch funct3 onto a condition selector.
fn branch_cond(d: &Decoded, pc: u32) -> Result<BranchCond, SimError> {
    match d.funct3 {
        funct3::BEQ => Ok(BranchCond::Eq),
        funct3::BNE => Ok(BranchCond::Ne),
        funct3::BLT | funct3::BLTU => Ok(BranchCond::Lt),
        funct3::BGE | funct3::BGEU => Ok(BranchCond::Ge),
        _ => Err(SimError::IllegalBranchFunct {
            funct3: d.funct3,
            pc,
        }),
    }
}

//! Per-cycle control signals and operation selectors.
//!
//! This module defines the signals that drive one instruction through the
//! datapath. It performs:
//! 1. **Operation Classification:** Categorizes ALU operations and branch conditions.
//! 2. **Operand Selection:** Defines sources for the two ALU inputs (register, PC, immediate).
//! 3. **Write-Back Control:** Selects which computed value reaches the destination register.
//!
//! A fresh [`ControlSignals`] value is built during decode every cycle and
//! discarded after the control-unit update; no signal persists across cycles.

/// ALU operation selectors for the supported integer subset.
///
/// Every selector is a legal-by-construction value: decode maps raw funct
/// fields onto this enum and rejects anything else, so the ALU dispatch is
/// exhaustive with no runtime default case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition. The default: every non-ALU opcode (jumps, branches,
    /// loads, stores, LUI, AUIPC) computes its result through this one adder.
    #[default]
    Add,

    /// Integer subtraction.
    Sub,

    /// Bitwise XOR.
    Xor,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,

    /// Shift left logical.
    Sll,

    /// Shift right logical.
    Srl,

    /// Integer multiply (signed).
    Mul,

    /// Integer divide (signed).
    Div,

    /// Integer remainder (signed).
    Rem,
}

/// Branch condition selectors.
///
/// Signed vs. unsigned ordering is carried separately in
/// [`ControlSignals::branch_unsigned`], mirroring the BrUn control line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchCond {
    /// Branch if equal.
    Eq,

    /// Branch if not equal.
    Ne,

    /// Branch if less than.
    Lt,

    /// Branch if greater or equal.
    Ge,
}

/// Source for ALU operand A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// Use the `rs1` register value.
    #[default]
    Reg1,

    /// Use the program counter value.
    Pc,
}

/// Source for ALU operand B.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Use the `rs2` register value.
    #[default]
    Reg2,

    /// Use the sign-extended immediate value.
    Imm,
}

/// Write-back source selector.
///
/// Chooses what (if anything) is stored into the destination register. An
/// unrecognized selector is unrepresentable: the enum is closed and the
/// write-back match is exhaustive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WbSel {
    /// No write-back (stores, branches).
    #[default]
    None,

    /// Write the ALU result.
    Alu,

    /// Write the value loaded from data memory.
    Mem,

    /// Write the return linkage `pc + 4` (JAL, JALR).
    PcPlus4,
}

/// Control signals for one cycle of execution.
///
/// Built fresh by the decode stage each cycle with everything false/none,
/// then populated from the opcode tables. Passed explicitly between stages
/// so no stale signal can leak into the next cycle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlSignals {
    /// Write-back source selector.
    pub wb: WbSel,

    /// Next PC comes from the computed target (ALU result) instead of `pc + 4`.
    /// Set unconditionally for JAL/JALR at decode; set by the branch unit at
    /// execute when the condition holds.
    pub pc_from_target: bool,

    /// Source selection for ALU operand A.
    pub a_src: OpASrc,

    /// Source selection for ALU operand B.
    pub b_src: OpBSrc,

    /// ALU operation to perform.
    pub alu: AluOp,

    /// Branch condition to evaluate at execute, if this is a branch.
    pub branch: Option<BranchCond>,

    /// Branch comparison uses the unsigned domain (BLTU/BGEU).
    pub branch_unsigned: bool,

    /// Instruction reads data memory (load).
    pub mem_read: bool,

    /// Instruction writes data memory (store).
    pub mem_write: bool,
}

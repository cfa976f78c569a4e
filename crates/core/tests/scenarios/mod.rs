//! End-to-End Program Scenarios.
//!
//! Complete binary-text programs driven through `Processor::run`. Each
//! program ends by planting the halt sentinel in `x31` via LUI + ADDI
//! (the upper immediate is incremented to compensate the sign-extended
//! low half).

use pretty_assertions::assert_eq;

use rv32sim_core::{Config, Processor, SimError};

use crate::common::builder::InstructionBuilder;

const HALT_SENTINEL: u32 = 0xDEAD_BEEF;

/// The two-instruction halt sequence: `x31 <- 0xDEADBEEF`.
fn halt_sequence() -> Vec<String> {
    vec![
        InstructionBuilder::new().lui(31, 0xDEADC).build_line(),
        InstructionBuilder::new().addi(31, 31, -273).build_line(),
    ]
}

fn run_program(body: Vec<String>) -> Processor {
    let mut lines = body;
    lines.extend(halt_sequence());
    let program = lines.join("\n");

    let mut cpu = Processor::new(&Config::default());
    cpu.load_program(program.as_bytes()).unwrap();
    cpu.run().unwrap();
    cpu
}

#[test]
fn halt_sequence_alone_plants_the_sentinel() {
    let cpu = run_program(vec![]);
    assert_eq!(cpu.regs.read(31), HALT_SENTINEL);
    // The register dump renders the sentinel as a signed decimal.
    assert_eq!(cpu.regs.read(31) as i32, -559038737);
    assert_eq!(cpu.clock, 2);
    assert_eq!(cpu.pc, 8);
}

#[test]
fn preplanted_sentinel_executes_nothing() {
    // The halt check runs at the top of every cycle.
    let mut cpu = Processor::new(&Config::default());
    cpu.regs.write(31, HALT_SENTINEL);
    cpu.run().unwrap();
    assert_eq!(cpu.clock, 0);
    assert_eq!(cpu.pc, 0);
}

#[test]
fn single_add_with_preloaded_registers() {
    let mut cpu = Processor::new(&Config::default());
    cpu.regs.write(1, 5);
    cpu.regs.write(2, 7);
    let program = InstructionBuilder::new().add(3, 1, 2).build_line();
    cpu.load_program(program.as_bytes()).unwrap();

    cpu.step().unwrap();
    assert_eq!(cpu.regs.read(3), 12);
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.clock, 1);
}

#[test]
fn add_immediates_and_registers() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(1, 0, 5).build_line(),
        InstructionBuilder::new().addi(2, 0, 7).build_line(),
        InstructionBuilder::new().add(3, 1, 2).build_line(),
    ]);

    assert_eq!(cpu.regs.read(1), 5);
    assert_eq!(cpu.regs.read(2), 7);
    assert_eq!(cpu.regs.read(3), 12);
    assert_eq!(cpu.clock, 5);
    assert_eq!(cpu.pc, 20);
}

#[test]
fn taken_branch_skips_the_shadowed_instruction() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(1, 0, 1).build_line(),
        InstructionBuilder::new().addi(2, 0, 1).build_line(),
        InstructionBuilder::new().beq(1, 2, 8).build_line(),
        InstructionBuilder::new().addi(5, 0, 99).build_line(),
    ]);

    assert_eq!(cpu.regs.read(5), 0);
    // addi, addi, beq, then straight to the halt pair.
    assert_eq!(cpu.clock, 5);
}

#[test]
fn not_taken_branch_falls_through() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(1, 0, 1).build_line(),
        InstructionBuilder::new().addi(2, 0, 2).build_line(),
        InstructionBuilder::new().beq(1, 2, 8).build_line(),
        InstructionBuilder::new().addi(5, 0, 99).build_line(),
    ]);

    assert_eq!(cpu.regs.read(5), 99);
    assert_eq!(cpu.clock, 6);
}

#[test]
fn countdown_loop_with_backward_branch() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(1, 0, 5).build_line(),
        InstructionBuilder::new().addi(1, 1, -1).build_line(),
        InstructionBuilder::new().bne(1, 0, -4).build_line(),
    ]);

    assert_eq!(cpu.regs.read(1), 0);
    // 1 setup + 5 iterations of (addi, bne) + 2 halt.
    assert_eq!(cpu.clock, 13);
}

#[test]
fn store_then_load_round_trips_through_data_memory() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(10, 0, 100).build_line(),
        InstructionBuilder::new().addi(11, 0, 42).build_line(),
        InstructionBuilder::new().sw(10, 11, 0).build_line(),
        InstructionBuilder::new().lw(12, 10, 0).build_line(),
    ]);

    assert_eq!(cpu.regs.read(12), 42);

    let touched: Vec<usize> = cpu.dmem.touched_bytes().map(|(o, _)| o).collect();
    assert_eq!(touched, vec![100, 101, 102, 103]);
}

#[test]
fn jal_links_and_jumps() {
    // jal x1, +12 over two shadowed instructions, landing on the halt pair.
    let cpu = run_program(vec![
        InstructionBuilder::new().jal(1, 12).build_line(),
        InstructionBuilder::new().addi(5, 0, 99).build_line(),
        InstructionBuilder::new().addi(6, 0, 99).build_line(),
    ]);

    assert_eq!(cpu.regs.read(1), 4);
    assert_eq!(cpu.regs.read(5), 0);
    assert_eq!(cpu.regs.read(6), 0);
    assert_eq!(cpu.clock, 3);
}

#[test]
fn lui_addi_builds_arbitrary_constants() {
    let cpu = run_program(vec![
        InstructionBuilder::new().lui(7, 0x12345).build_line(),
        InstructionBuilder::new().addi(7, 7, 0x678).build_line(),
    ]);
    assert_eq!(cpu.regs.read(7), 0x1234_5678);
}

#[test]
fn jump_to_misaligned_address_faults_on_next_fetch() {
    let program = [
        InstructionBuilder::new().addi(1, 0, 0).build_line(),
        InstructionBuilder::new().jalr(0, 1, 2).build_line(),
    ]
    .join("\n");

    let mut cpu = Processor::new(&Config::default());
    cpu.load_program(program.as_bytes()).unwrap();

    let err = cpu.run().unwrap_err();
    assert!(matches!(err, SimError::MisalignedFetch { addr: 2 }));
    // The addi and the jump retired; the faulted cycle is not counted.
    assert_eq!(cpu.clock, 2);
    assert_eq!(cpu.stats.total(), cpu.clock);
}

#[test]
fn running_off_the_program_hits_the_zero_word() {
    // No halt sequence: the word after the program is all zeros, which is
    // not a legal encoding.
    let program = InstructionBuilder::new().addi(1, 0, 1).build_line();

    let mut cpu = Processor::new(&Config::default());
    cpu.load_program(program.as_bytes()).unwrap();

    let err = cpu.run().unwrap_err();
    assert!(matches!(err, SimError::IllegalOpcode { opcode: 0, pc: 4 }));
    // Only the addi retired.
    assert_eq!(cpu.clock, 1);
}

#[test]
fn instruction_mix_is_reported() {
    let cpu = run_program(vec![
        InstructionBuilder::new().addi(10, 0, 100).build_line(),
        InstructionBuilder::new().addi(11, 0, 42).build_line(),
        InstructionBuilder::new().sw(10, 11, 0).build_line(),
        InstructionBuilder::new().lw(12, 10, 0).build_line(),
        InstructionBuilder::new().jal(1, 4).build_line(),
    ]);

    // Two addi + the halt pair count as ALU.
    assert_eq!(cpu.stats.inst_alu, 4);
    assert_eq!(cpu.stats.inst_load, 1);
    assert_eq!(cpu.stats.inst_store, 1);
    assert_eq!(cpu.stats.inst_branch, 1);
    assert_eq!(cpu.stats.total(), cpu.clock);
}

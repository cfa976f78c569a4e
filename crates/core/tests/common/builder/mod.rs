
pub use instruction::InstructionBuilder;

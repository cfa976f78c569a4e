//! Command-line front end for the RV32I simulator.
//!
//! Reads a binary-text program from a file (or stdin when no file is given),
//! runs it to the halt sentinel, and prints the run report: clock cycles,
//! the register dump, and the touched-memory dump.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rv32sim_core::{Config, Processor, SimError};

/// A single-cycle RISC-V RV32I instruction-set simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Program file: one 32-bit binary-encoded instruction per line.
    /// Reads from stdin when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match simulate(cli.file.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(file: Option<&std::path::Path>) -> Result<(), SimError> {
    let mut cpu = Processor::new(&Config::default());

    match file {
        Some(path) => {
            let reader = BufReader::new(File::open(path)?);
            load_and_run(&mut cpu, reader)?;
        }
        None => {
            let stdin = io::stdin();
            load_and_run(&mut cpu, stdin.lock())?;
        }
    }

    cpu.print_statistics();
    cpu.stats.print();
    cpu.dump_registers();
    cpu.dump_memory();
    Ok(())
}

fn load_and_run<R: BufRead>(cpu: &mut Processor, reader: R) -> Result<(), SimError> {
    cpu.load_program(reader)?;
    cpu.run()
}

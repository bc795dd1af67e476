//! CLI command implementation.

use std::fs;
use std::io::{self, Write};

use bytevm_common::Program;

/// Load a program image and execute it against stdout.
pub fn run(path: &str) -> Result<(), i32> {
    let program = read_program(path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match bytevm_vm::run(&program, &mut out) {
        Ok(()) => {
            out.flush().map_err(|e| {
                eprintln!("error: cannot flush stdout: {e}");
                2
            })?;
            Ok(())
        }
        Err(e) => {
            // Keep whatever emit produced before the fault visible;
            // process::exit will not flush the buffer.
            let _ = out.flush();
            eprintln!("runtime error: {e}");
            Err(2)
        }
    }
}

/// Read a program image from disk.
///
/// The file's bytes are the program; there is no framing to validate, so
/// the only failure mode is I/O.
fn read_program(path: &str) -> Result<Program, i32> {
    let bytes = fs::read(path).map_err(|e| {
        eprintln!("error: cannot read '{path}': {e}");
        1
    })?;
    Ok(Program::new(bytes))
}

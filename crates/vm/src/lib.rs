//! Byte VM — interprets flat byte-stream programs.
//!
//! The VM is a single-threaded bytecode interpreter with:
//! - An operand stack of tagged values
//! - A 256-entry dispatch table mapping every program byte to a handler
//! - A fetch-dispatch loop that stops at the halt byte
//!
//! Unregistered bytes execute as no-ops by design. Faults the underlying
//! machine model leaves undefined — running off the end of the program,
//! stack overflow and underflow — are defined, located errors here.
//!
//! # Usage
//!
//! ```
//! use bytevm_common::Program;
//! use bytevm_vm::run;
//!
//! let program = Program::new(vec![b'c', b'H', b'e', b'h']);
//! let mut out = Vec::new();
//! run(&program, &mut out).unwrap();
//! assert_eq!(out, b"H");
//! ```

pub mod dispatch;
pub mod error;
pub mod execute;
pub mod machine;

pub use dispatch::{DispatchTable, Handler};
pub use error::RuntimeError;
pub use machine::{Machine, DEFAULT_STACK_CAPACITY};

use std::io::Write;

use bytevm_common::Program;

/// Execute a program, writing emit output to `out`.
///
/// This is the primary entry point for the VM. It:
/// 1. Builds the dispatch table for the standard instruction set
/// 2. Creates a machine with the default stack capacity
/// 3. Executes from offset 0 until the halt byte
///
/// Embedders that register their own opcodes use [`DispatchTable`] and
/// [`Machine`] directly.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution faults (running off the end of
/// the program, stack overflow or underflow, output write failure).
pub fn run(program: &Program, out: &mut dyn Write) -> Result<(), RuntimeError> {
    let table = DispatchTable::new();
    let mut machine = Machine::new(program, out);
    machine.execute(&table)
}

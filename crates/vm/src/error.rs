//! Runtime faults for the byte VM.
//!
//! Every variant includes the byte offset (`at`) of the access that
//! faulted, for debugging. There is no recovery path: any fault aborts
//! the run.

use std::io;

use bytevm_common::StackError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// A fetch moved past the end of the program without reaching a halt
    /// byte. Covers both a missing halt sentinel and a truncated
    /// push-char immediate.
    #[error("ran off end of program at byte offset {at}")]
    EndOfProgram { at: usize },

    /// Push with the operand stack already at capacity.
    #[error("stack overflow (capacity {capacity}) at byte offset {at}")]
    StackOverflow { at: usize, capacity: usize },

    /// Pop or peek on an empty operand stack.
    #[error("stack underflow at byte offset {at}")]
    StackUnderflow { at: usize },

    /// Writing to the output stream failed during emit.
    #[error("output write failed at byte offset {at}: {kind}")]
    Output { at: usize, kind: io::ErrorKind },
}

impl RuntimeError {
    /// Attach a faulting byte offset to a stack-bounds error.
    pub fn from_stack(err: StackError, at: usize) -> Self {
        match err {
            StackError::Overflow { capacity } => RuntimeError::StackOverflow { at, capacity },
            StackError::Underflow => RuntimeError::StackUnderflow { at },
        }
    }
}

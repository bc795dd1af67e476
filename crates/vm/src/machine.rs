//! VM state management: program buffer, operand stack, instruction pointer.

use std::io::Write;

use bytevm_common::{Program, Stack, Value};

use crate::error::RuntimeError;

/// Default operand stack capacity in slots.
pub const DEFAULT_STACK_CAPACITY: usize = 1024;

/// The byte VM.
///
/// Owns the operand stack and instruction pointer for the duration of one
/// run; the program buffer and output stream are borrowed from the caller.
/// The primitives handlers build on (`push`, `pop`, `peek`, `fetch`,
/// `write_byte`) are public so registered opcodes outside this crate have
/// the same surface as the built-in ones.
pub struct Machine<'a> {
    pub(crate) program: &'a Program,
    pub(crate) stack: Stack,
    pub(crate) pc: usize,
    pub(crate) out: &'a mut dyn Write,
}

impl<'a> Machine<'a> {
    /// Create a machine with the default stack capacity.
    pub fn new(program: &'a Program, out: &'a mut dyn Write) -> Self {
        Self::with_stack_capacity(program, out, DEFAULT_STACK_CAPACITY)
    }

    /// Create a machine with an explicit stack capacity.
    pub fn with_stack_capacity(
        program: &'a Program,
        out: &'a mut dyn Write,
        capacity: usize,
    ) -> Self {
        Self {
            program,
            stack: Stack::new(capacity),
            pc: 0,
            out,
        }
    }

    /// Push a value, reporting overflow at byte offset `at`.
    pub fn push(&mut self, value: Value, at: usize) -> Result<usize, RuntimeError> {
        self.stack
            .push(value)
            .map_err(|e| RuntimeError::from_stack(e, at))
    }

    /// Pop a value, reporting underflow at byte offset `at`.
    pub fn pop(&mut self, at: usize) -> Result<Value, RuntimeError> {
        self.stack
            .pop()
            .map_err(|e| RuntimeError::from_stack(e, at))
    }

    /// The top of stack without removing it, reporting underflow at `at`.
    pub fn peek(&self, at: usize) -> Result<Value, RuntimeError> {
        self.stack
            .peek()
            .map_err(|e| RuntimeError::from_stack(e, at))
    }

    /// Fetch the program byte at `offset`, faulting past the end.
    pub fn fetch(&self, offset: usize) -> Result<u8, RuntimeError> {
        self.program
            .byte(offset)
            .ok_or(RuntimeError::EndOfProgram { at: offset })
    }

    /// Write one byte to the output stream on behalf of the instruction
    /// at byte offset `at`.
    pub fn write_byte(&mut self, byte: u8, at: usize) -> Result<(), RuntimeError> {
        self.out.write_all(&[byte]).map_err(|e| RuntimeError::Output {
            at,
            kind: e.kind(),
        })
    }

    /// Current operand stack depth.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }
}

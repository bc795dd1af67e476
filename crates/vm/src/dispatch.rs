//! Opcode dispatch: a 256-entry table mapping every program byte to a
//! handler.

use bytevm_common::{Opcode, Value};

use crate::error::RuntimeError;
use crate::machine::Machine;

/// An opcode handler.
///
/// Receives the machine and the byte offset of the opcode being executed,
/// and returns the offset of the next instruction. The handler alone
/// decides how many program bytes it consumes — the loop never advances
/// the instruction pointer itself, so a handler is free to return any
/// position.
pub type Handler = fn(&mut Machine<'_>, usize) -> Result<usize, RuntimeError>;

/// Maps each of the 256 possible program bytes to a [`Handler`].
///
/// Construction first fills every slot with the no-op handler, then
/// overrides the bytes of the standard instruction set. A byte with no
/// registered handler therefore executes as a no-op that advances past
/// itself, never as an error. The table is built before execution starts
/// and is not mutated during a run.
pub struct DispatchTable {
    handlers: [Handler; 256],
}

impl DispatchTable {
    /// Build the table for the standard instruction set.
    pub fn new() -> Self {
        let mut table = Self {
            handlers: [nop as Handler; 256],
        };
        table.register(Opcode::PushChar as u8, push_char);
        table.register(Opcode::Emit as u8, emit);
        table
    }

    /// Bind `handler` to `byte`, replacing whatever was there.
    ///
    /// Registration is a construction-time operation; new opcodes are
    /// added here, not by modifying the execution loop.
    pub fn register(&mut self, byte: u8, handler: Handler) {
        self.handlers[byte as usize] = handler;
    }

    /// The handler bound to `byte`.
    pub fn handler(&self, byte: u8) -> Handler {
        self.handlers[byte as usize]
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Any unregistered byte: no state change, advance one byte.
fn nop(_machine: &mut Machine<'_>, ip: usize) -> Result<usize, RuntimeError> {
    Ok(ip + 1)
}

/// `'c'`: push the immediate byte after the opcode as a character value.
/// Consumes two program bytes (opcode + immediate).
fn push_char(machine: &mut Machine<'_>, ip: usize) -> Result<usize, RuntimeError> {
    let immediate = machine.fetch(ip + 1)?;
    machine.push(Value::Char(immediate), ip)?;
    Ok(ip + 2)
}

/// `'e'`: pop the top of stack and write its low 8 bits to the output
/// stream. Consumes one program byte.
fn emit(machine: &mut Machine<'_>, ip: usize) -> Result<usize, RuntimeError> {
    let value = machine.pop(ip)?;
    machine.write_byte(value.low_byte(), ip)?;
    Ok(ip + 1)
}

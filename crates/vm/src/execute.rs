//! The fetch-decode-execute loop.

use bytevm_common::Opcode;

use crate::dispatch::DispatchTable;
use crate::error::RuntimeError;
use crate::machine::Machine;

impl<'a> Machine<'a> {
    /// Execute the program until the halt byte or a fault.
    ///
    /// Each iteration fetches the byte at the instruction pointer, stops
    /// if it is the halt sentinel, and otherwise dispatches to that
    /// byte's handler and assigns the instruction pointer the handler
    /// returns. The halt check happens before dispatch, so the halt byte
    /// is never passed to a handler.
    ///
    /// Every fetch is bounds-checked: a program that runs past its last
    /// byte without halting faults with [`RuntimeError::EndOfProgram`]
    /// instead of reading arbitrary memory.
    pub fn execute(&mut self, table: &DispatchTable) -> Result<(), RuntimeError> {
        loop {
            let byte = self.fetch(self.pc)?;
            if byte == Opcode::Halt as u8 {
                return Ok(());
            }
            let handler = table.handler(byte);
            self.pc = handler(self, self.pc)?;
        }
    }
}

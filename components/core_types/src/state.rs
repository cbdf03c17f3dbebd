//! Execution state handed to and returned by the interpreter.

use std::rc::Rc;

use crate::object::ObjectRef;
use crate::type_info::TypeInfo;

/// Bytecode pointer, instruction pointer, and lexical context of one run.
///
/// The interpreter consumes a state and returns the updated one; an ordinary
/// object keeps the returned state as its instance state.
#[derive(Debug, Clone)]
pub struct ExecutionState {
    /// Class whose bytecode is being executed
    pub type_info: Rc<TypeInfo>,
    /// Offset of the next instruction
    pub instruction_pointer: usize,
    /// Innermost scope, if one has been entered
    pub current_context: Option<ObjectRef>,
    /// Set once the program has run to completion
    pub completed: bool,
}

impl ExecutionState {
    /// Fresh state positioned at the first byte of the class bytecode.
    pub fn new(type_info: Rc<TypeInfo>) -> Self {
        Self {
            type_info,
            instruction_pointer: 0,
            current_context: None,
            completed: false,
        }
    }

    /// Name of the class being executed.
    pub fn class_name(&self) -> &str {
        self.type_info.class_name()
    }

    /// Bytecode being executed.
    pub fn bytecode(&self) -> &[u8] {
        self.type_info.bytecode()
    }

    /// Read the byte at the instruction pointer and advance past it.
    pub fn fetch(&mut self) -> Option<u8> {
        let byte = self.bytecode().get(self.instruction_pointer).copied()?;
        self.instruction_pointer += 1;
        Some(byte)
    }

    /// True once the instruction pointer has passed the last byte.
    pub fn is_at_end(&self) -> bool {
        self.instruction_pointer >= self.type_info.bytecode_size()
    }

    /// Mark the run as finished, leaving the pointer at the end of the bytecode.
    pub fn finish(&mut self) {
        self.instruction_pointer = self.type_info.bytecode_size();
        self.completed = true;
    }
}

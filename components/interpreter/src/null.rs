//! Interpreter used when no engine is attached.

use std::rc::Rc;

use core_types::{ExecutionState, RuntimeResult, TypeInfo};

use crate::engine::Interpreter;

/// Interpreter that executes nothing.
///
/// Every run completes immediately with the instruction pointer at the end
/// of the bytecode, and static constructors leave static storage untouched.
/// Useful for inspecting classes without an engine.
#[derive(Debug, Default)]
pub struct NullInterpreter {
    runs: usize,
    static_constructors: usize,
}

impl NullInterpreter {
    /// Create a new null interpreter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of states passed to [`Interpreter::run`].
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Number of static constructors requested.
    pub fn static_constructors(&self) -> usize {
        self.static_constructors
    }
}

impl Interpreter for NullInterpreter {
    fn run(&mut self, mut state: ExecutionState) -> RuntimeResult<ExecutionState> {
        self.runs += 1;
        tracing::trace!(class = state.class_name(), "skipping class body");
        state.finish();
        Ok(state)
    }

    fn run_static_constructor(&mut self, type_info: &Rc<TypeInfo>) -> RuntimeResult<()> {
        self.static_constructors += 1;
        tracing::trace!(class = type_info.class_name(), "skipping static constructor");
        Ok(())
    }
}

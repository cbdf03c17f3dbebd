//! The interpreter seam.
//!
//! The bytecode interpreter loop lives outside this workspace. The object
//! runtime only needs two entry points from it, both synchronous: running a
//! class's static constructor once after the class is loaded, and running a
//! class body to build an instance.

use std::rc::Rc;

use core_types::{ExecutionState, RuntimeResult, TypeInfo};

/// A bytecode interpreter the runtime can call into.
///
/// Both methods block until the nested program terminates. Implementations
/// may re-enter the type registry and object factory while running, since
/// those take shared references.
pub trait Interpreter {
    /// Run `state` to completion and return the resulting state.
    fn run(&mut self, state: ExecutionState) -> RuntimeResult<ExecutionState>;

    /// Execute the static constructor of a freshly loaded class.
    ///
    /// Called exactly once per class, after the descriptor is registered.
    /// Typically populates the class's static variables.
    fn run_static_constructor(&mut self, type_info: &Rc<TypeInfo>) -> RuntimeResult<()>;
}

impl<I: Interpreter + ?Sized> Interpreter for Box<I> {
    fn run(&mut self, state: ExecutionState) -> RuntimeResult<ExecutionState> {
        (**self).run(state)
    }

    fn run_static_constructor(&mut self, type_info: &Rc<TypeInfo>) -> RuntimeResult<()> {
        (**self).run_static_constructor(type_info)
    }
}

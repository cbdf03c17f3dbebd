//! Interpreter interface for the object runtime
//!
//! This crate defines how the runtime calls into a bytecode interpreter:
//! - [`Interpreter`] - the trait an engine implements
//! - [`NullInterpreter`] - a stand-in that runs nothing
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use core_types::{ExecutionState, TypeInfo};
//! use interpreter::{Interpreter, NullInterpreter};
//!
//! let info = Rc::new(TypeInfo::new("Main", vec![0, 1]));
//! let mut interp = NullInterpreter::new();
//!
//! let state = interp.run(ExecutionState::new(info)).unwrap();
//! assert!(state.completed);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod engine;
pub mod null;

pub use engine::Interpreter;
pub use null::NullInterpreter;

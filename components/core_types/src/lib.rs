//! Core value and object model for the runtime.
//!
//! This crate provides the types shared by every other component: the
//! register cell, the five runtime object kinds, loaded class descriptors,
//! symbol tables, and the error taxonomy.
//!
//! # Overview
//!
//! - [`Register`] - Tagged value cell
//! - [`RuntimeObject`] / [`ObjectKind`] - Heap values and their variants
//! - [`PropertyMap`] - Ordered properties with enumerability flags
//! - [`TypeInfo`] - Cached descriptor of a loaded class
//! - [`ImportsTable`] - Alias to fully-qualified class name mapping
//! - [`SymbolTable`] - Name to slot bindings
//! - [`ExecutionState`] - State passed through the interpreter
//! - [`RuntimeError`] - Everything that can go wrong
//!
//! # Examples
//!
//! ```
//! use core_types::{ObjectKind, Register, RuntimeObject};
//!
//! let s = RuntimeObject::new(ObjectKind::String { value: "hi".into() }).into_ref();
//! let reg = Register::Object(s.clone());
//! assert_eq!(reg.to_string(), "hi");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod object;
mod property;
mod state;
mod symbol;
mod type_info;
mod value;

pub use error::{RuntimeError, RuntimeResult};
pub use object::{
    ref_count, CatchHandler, ContextObject, ObjectId, ObjectKind, ObjectRef, RuntimeObject,
};
pub use property::{Property, PropertyMap};
pub use state::ExecutionState;
pub use symbol::{SymbolTable, FIRST_SLOT};
pub use type_info::{ImportsTable, TypeInfo};
pub use value::{NativeFn, NativeFunction, Register};

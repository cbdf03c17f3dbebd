//! Host functions exposed to bytecode as object properties
//!
//! This crate provides the builtin accessors every runtime object kind
//! carries from birth. They are stored non-enumerable, so they are callable
//! but never show up in key listings:
//! - `length` on strings
//! - `size` and `keys` on generic objects
//!
//! # Example
//!
//! ```
//! use builtins::{new_generic_object, ObjectPrototype};
//! use core_types::Register;
//!
//! let obj = new_generic_object();
//! obj.borrow_mut().properties.insert("x", Register::Integer(1));
//!
//! let size = ObjectPrototype::size(&obj, &[]).unwrap();
//! assert_eq!(size, Register::Integer(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod object;
pub mod string;

pub use object::{new_generic_object, ObjectPrototype};
pub use string::{new_string_object, StringPrototype};

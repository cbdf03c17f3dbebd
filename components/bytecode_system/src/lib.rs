//! Bytecode data segment codecs
//!
//! This crate turns raw bytecode data segments into the structures the
//! interpreter consumes.
//!
//! # Features
//!
//! - Symbol table decoding into ordered name to slot bindings
//! - The matching encoder, for compilers and tooling
//!
//! # Example
//!
//! ```
//! use bytecode_system::{decode_symbol_table, encode_symbol_table};
//!
//! let bytes = encode_symbol_table(["a", "bb", "ccc"]).unwrap();
//! let table = decode_symbol_table(&bytes).unwrap();
//!
//! let names: Vec<_> = table.names().collect();
//! assert_eq!(names, vec!["a", "bb", "ccc"]);
//! assert_eq!(table.slot("ccc"), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod symbol_table;

pub use symbol_table::{
    decode_symbol_table, decode_symbol_table_prefix, encode_symbol_table, COUNT_WIDTH,
};

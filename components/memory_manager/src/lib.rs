//! Memory Manager - object construction for the runtime
//!
//! This component provides:
//! - [`ObjectFactory`] building the five object kinds
//! - Ordinary instances seeded by running their class through the interpreter
//! - Generic, string, context, closure, and class-reference objects
//!
//! Objects are reference counted through [`core_types::ObjectRef`]; an object
//! lives as long as some property map, captured scope, static slot, or
//! interpreter register holds it.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod factory;

pub use factory::ObjectFactory;

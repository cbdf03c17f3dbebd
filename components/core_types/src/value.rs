//! Register values.
//!
//! A [`Register`] is the tagged cell stored in every property map, every
//! static-variable slot, and every symbol-table binding.

use std::fmt;
use std::rc::Rc;

use crate::error::RuntimeResult;
use crate::object::ObjectRef;

/// Signature of a host function exposed to bytecode.
///
/// The first argument is the receiver: the object the property was read from.
pub type NativeFn = fn(&ObjectRef, &[Register]) -> RuntimeResult<Register>;

/// A host function wrapped as a callable runtime value.
///
/// # Examples
///
/// ```
/// use core_types::{NativeFunction, Register, RuntimeResult, ObjectRef};
///
/// fn answer(_this: &ObjectRef, _args: &[Register]) -> RuntimeResult<Register> {
///     Ok(Register::Integer(42))
/// }
///
/// let native = NativeFunction::new("answer", answer);
/// assert_eq!(native.name(), "answer");
/// ```
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    func: NativeFn,
}

impl NativeFunction {
    /// Wrap a host function under the given name.
    pub fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }

    /// Name the function was registered under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the host function with `this` as receiver.
    pub fn call(&self, this: &ObjectRef, args: &[Register]) -> RuntimeResult<Register> {
        (self.func)(this, args)
    }
}

/// Same name and same host function.
impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.name).finish()
    }
}

/// Tagged value cell.
#[derive(Clone, Default)]
pub enum Register {
    /// No value stored
    #[default]
    Undefined,
    /// Boolean value
    Boolean(bool),
    /// Signed integer
    Integer(i64),
    /// Floating point number
    Decimal(f64),
    /// Reference to a wrapped host function
    NativeFunction(NativeFunction),
    /// Shared reference to a runtime object
    Object(ObjectRef),
}

impl Register {
    /// Returns the object reference if this register holds one.
    pub fn as_object(&self) -> Option<&ObjectRef> {
        match self {
            Register::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the integer payload if this register holds one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Register::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the native function if this register holds one.
    pub fn as_native(&self) -> Option<&NativeFunction> {
        match self {
            Register::NativeFunction(native) => Some(native),
            _ => None,
        }
    }

    /// Name of the tag, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Register::Undefined => "undefined",
            Register::Boolean(_) => "boolean",
            Register::Integer(_) => "integer",
            Register::Decimal(_) => "decimal",
            Register::NativeFunction(_) => "native function",
            Register::Object(_) => "object",
        }
    }
}

impl fmt::Debug for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Undefined => write!(f, "Undefined"),
            Register::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Register::Integer(n) => f.debug_tuple("Integer").field(n).finish(),
            Register::Decimal(n) => f.debug_tuple("Decimal").field(n).finish(),
            Register::NativeFunction(native) => native.fmt(f),
            // Objects may form cycles through captured contexts; print the id only.
            Register::Object(obj) => match obj.try_borrow() {
                Ok(obj) => f.debug_tuple("Object").field(&obj.id()).finish(),
                Err(_) => write!(f, "Object(<borrowed>)"),
            },
        }
    }
}

impl PartialEq for Register {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Register::Undefined, Register::Undefined) => true,
            (Register::Boolean(a), Register::Boolean(b)) => a == b,
            (Register::Integer(a), Register::Integer(b)) => a == b,
            (Register::Decimal(a), Register::Decimal(b)) => a == b,
            (Register::NativeFunction(a), Register::NativeFunction(b)) => a == b,
            (Register::Object(a), Register::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Register::Undefined => write!(f, "undefined"),
            Register::Boolean(b) => write!(f, "{}", b),
            Register::Integer(n) => write!(f, "{}", n),
            Register::Decimal(n) => write!(f, "{}", n),
            Register::NativeFunction(native) => write!(f, "native {}", native.name),
            Register::Object(obj) => match obj.try_borrow() {
                Ok(obj) => write!(f, "{}", obj),
                Err(_) => write!(f, "obj@?"),
            },
        }
    }
}

impl From<i64> for Register {
    fn from(n: i64) -> Self {
        Register::Integer(n)
    }
}

impl From<bool> for Register {
    fn from(b: bool) -> Self {
        Register::Boolean(b)
    }
}

impl From<ObjectRef> for Register {
    fn from(obj: ObjectRef) -> Self {
        Register::Object(obj)
    }
}

//! String builtins

use std::cell::Ref;

use core_types::{
    NativeFunction, ObjectKind, ObjectRef, PropertyMap, Register, RuntimeError, RuntimeObject,
    RuntimeResult,
};

/// Builtin accessors installed on every string object
pub struct StringPrototype;

impl StringPrototype {
    /// Property name of the length accessor
    pub const LENGTH: &'static str = "length";

    /// `length`: number of characters in the receiver
    pub fn length(this: &ObjectRef, _args: &[Register]) -> RuntimeResult<Register> {
        let obj = borrow_receiver(this)?;
        let value = obj.as_str().ok_or_else(|| {
            RuntimeError::type_error(format!(
                "length called on a {} object",
                obj.kind.name()
            ))
        })?;
        count_register(value.chars().count())
    }

    /// The wrapped `length` accessor
    pub fn length_native() -> NativeFunction {
        NativeFunction::new(Self::LENGTH, Self::length)
    }

    /// Install the string accessors as non-enumerable properties
    pub fn install(properties: &mut PropertyMap) {
        properties.insert_non_enumerable(
            Self::LENGTH,
            Register::NativeFunction(Self::length_native()),
        );
    }
}

/// Allocate a string object with its builtin accessors.
pub fn new_string_object(value: impl Into<String>) -> ObjectRef {
    let mut obj = RuntimeObject::new(ObjectKind::String {
        value: value.into(),
    });
    StringPrototype::install(&mut obj.properties);
    obj.into_ref()
}

pub(crate) fn count_register(count: usize) -> RuntimeResult<Register> {
    i64::try_from(count)
        .map(Register::Integer)
        .map_err(|_| RuntimeError::AllocationFailure)
}

pub(crate) fn borrow_receiver(this: &ObjectRef) -> RuntimeResult<Ref<'_, RuntimeObject>> {
    this.try_borrow()
        .map_err(|_| RuntimeError::type_error("receiver is being mutated"))
}

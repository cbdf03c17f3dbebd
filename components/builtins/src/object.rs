//! Generic object builtins

use core_types::{
    NativeFunction, ObjectKind, ObjectRef, PropertyMap, Register, RuntimeObject, RuntimeResult,
};

use crate::string::{borrow_receiver, count_register, new_string_object};

/// Builtin accessors installed on every generic object
pub struct ObjectPrototype;

impl ObjectPrototype {
    /// Property name of the key count accessor
    pub const SIZE: &'static str = "size";
    /// Property name of the key listing accessor
    pub const KEYS: &'static str = "keys";

    /// `size`: number of enumerable properties on the receiver
    pub fn size(this: &ObjectRef, _args: &[Register]) -> RuntimeResult<Register> {
        let obj = borrow_receiver(this)?;
        count_register(obj.properties.len())
    }

    /// `keys`: a new generic object mapping `"0"`, `"1"`, ... to the
    /// receiver's enumerable keys, in insertion order
    pub fn keys(this: &ObjectRef, _args: &[Register]) -> RuntimeResult<Register> {
        let obj = borrow_receiver(this)?;
        let list = new_generic_object();
        {
            let mut list_obj = list.borrow_mut();
            for (index, key) in obj.properties.keys().enumerate() {
                list_obj
                    .properties
                    .insert(index.to_string(), Register::Object(new_string_object(key)));
            }
        }
        Ok(Register::Object(list))
    }

    /// The wrapped `size` accessor
    pub fn size_native() -> NativeFunction {
        NativeFunction::new(Self::SIZE, Self::size)
    }

    /// The wrapped `keys` accessor
    pub fn keys_native() -> NativeFunction {
        NativeFunction::new(Self::KEYS, Self::keys)
    }

    /// Install the object accessors as non-enumerable properties
    pub fn install(properties: &mut PropertyMap) {
        properties.insert_non_enumerable(Self::SIZE, Register::NativeFunction(Self::size_native()));
        properties.insert_non_enumerable(Self::KEYS, Register::NativeFunction(Self::keys_native()));
    }
}

/// Allocate a generic object with no backing class and its builtin accessors.
pub fn new_generic_object() -> ObjectRef {
    let mut obj = RuntimeObject::new(ObjectKind::Ordinary {
        type_info: None,
        saved_state: None,
    });
    ObjectPrototype::install(&mut obj.properties);
    obj.into_ref()
}

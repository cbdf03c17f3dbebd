//! Construction of runtime objects.
//!
//! Each constructor returns a fresh handle with nothing else holding it, so
//! [`ref_count`](core_types::ref_count) reads zero on every new object.

use std::rc::Rc;

use builtins::{new_generic_object, new_string_object};
use class_loader::TypeRegistry;
use core_types::{
    ContextObject, ExecutionState, ImportsTable, ObjectKind, ObjectRef, RuntimeObject,
    RuntimeResult,
};
use interpreter::Interpreter;

/// Builds every object kind, loading classes through a shared registry.
#[derive(Debug, Clone)]
pub struct ObjectFactory {
    registry: Rc<TypeRegistry>,
}

impl ObjectFactory {
    /// Factory resolving classes through `registry`.
    pub fn new(registry: Rc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// The registry used by [`new_ordinary`](Self::new_ordinary).
    pub fn registry(&self) -> &Rc<TypeRegistry> {
        &self.registry
    }

    /// Construct an instance of `class_name`.
    ///
    /// The class is loaded on first use, which runs its static constructor.
    /// The class bytecode then runs to completion from a fresh execution
    /// state, and the returned state is kept as the instance state.
    ///
    /// With no class name this is [`new_generic`](Self::new_generic).
    ///
    /// # Errors
    ///
    /// Class loading errors, and any error the interpreter reports.
    pub fn new_ordinary(
        &self,
        class_name: Option<&str>,
        imports: Option<&ImportsTable>,
        interpreter: &mut dyn Interpreter,
    ) -> RuntimeResult<ObjectRef> {
        let Some(class_name) = class_name else {
            return Ok(self.new_generic());
        };

        let type_info = self.registry.get_or_load(class_name, imports, interpreter)?;
        let state = interpreter.run(ExecutionState::new(type_info.clone()))?;

        let obj = RuntimeObject::new(ObjectKind::Ordinary {
            type_info: Some(type_info),
            saved_state: Some(state),
        });
        tracing::debug!(class = class_name, id = %obj.id(), "constructed instance");
        Ok(obj.into_ref())
    }

    /// A generic object with no backing class and the `size` and `keys`
    /// accessors.
    pub fn new_generic(&self) -> ObjectRef {
        new_generic_object()
    }

    /// A string object owning `value`, with the `length` accessor.
    pub fn new_string(&self, value: impl Into<String>) -> ObjectRef {
        new_string_object(value)
    }

    /// An empty scope: no symbols, no catch handlers.
    pub fn new_context(&self) -> ObjectRef {
        RuntimeObject::new(ObjectKind::Context(ContextObject::default())).into_ref()
    }

    /// A closure. The arguments are stored as given.
    pub fn new_function_ref(
        &self,
        start_address: u32,
        parent_context: Option<ObjectRef>,
        state: Option<Rc<ExecutionState>>,
    ) -> ObjectRef {
        RuntimeObject::new(ObjectKind::FunctionRef {
            start_address,
            parent_context,
            state,
        })
        .into_ref()
    }

    /// A reference to the class called `name`. The class is not loaded.
    pub fn new_class_ref(&self, name: impl Into<String>) -> ObjectRef {
        RuntimeObject::new(ObjectKind::ClassRef { name: name.into() }).into_ref()
    }
}

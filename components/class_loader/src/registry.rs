//! Process-wide cache of loaded classes.
//!
//! The registry guarantees that each class name is loaded at most once and
//! that every lookup of the same name yields the same [`TypeInfo`]. A class's
//! static constructor runs exactly once, right after its first load.

use std::cell::RefCell;
use std::rc::Rc;

use core_types::{ImportsTable, RuntimeResult, TypeInfo};
use indexmap::IndexMap;
use interpreter::Interpreter;

use crate::imports::resolve_class_name;
use crate::loader::ClassLoader;

/// Cache from canonical class name to its descriptor.
///
/// All operations take `&self` so an interpreter running a static
/// constructor can load further classes through the same registry.
#[derive(Debug)]
pub struct TypeRegistry {
    loader: ClassLoader,
    types: RefCell<IndexMap<String, Rc<TypeInfo>>>,
    // Descriptors whose static constructor failed, reused on the next attempt.
    failed: RefCell<IndexMap<String, Rc<TypeInfo>>>,
}

impl TypeRegistry {
    /// Empty registry loading through `loader`.
    pub fn new(loader: ClassLoader) -> Self {
        Self {
            loader,
            types: RefCell::new(IndexMap::new()),
            failed: RefCell::new(IndexMap::new()),
        }
    }

    /// The loader used on cache misses.
    pub fn class_loader(&self) -> &ClassLoader {
        &self.loader
    }

    /// Return the descriptor for `class_name`, loading it on first use.
    ///
    /// The name is first resolved through `imports`. On a cache miss the
    /// bytecode is loaded, the descriptor is registered, and the static
    /// constructor is run through `interpreter` before returning.
    ///
    /// If the static constructor fails, the class is unregistered but its
    /// descriptor is kept aside. The next lookup reruns the constructor on
    /// that same descriptor without reloading, so a class name never maps to
    /// two descriptors, even when the failed constructor handed its own
    /// descriptor out.
    ///
    /// # Errors
    ///
    /// Load errors from the [`ClassLoader`] and errors raised by the static
    /// constructor. In both cases nothing stays registered for the name.
    pub fn get_or_load(
        &self,
        class_name: &str,
        imports: Option<&ImportsTable>,
        interpreter: &mut dyn Interpreter,
    ) -> RuntimeResult<Rc<TypeInfo>> {
        let name = resolve_class_name(class_name, imports);

        if let Some(info) = self.get(name) {
            tracing::debug!(class = name, "type cache hit");
            return Ok(info);
        }

        let retried = self.failed.borrow_mut().shift_remove(name);
        let info = match retried {
            Some(info) => {
                tracing::debug!(class = name, "retrying static constructor");
                self.types
                    .borrow_mut()
                    .insert(name.to_string(), info.clone());
                info
            }
            None => {
                let artifact = self.loader.load(name)?;
                tracing::info!(class = name, size = artifact.size(), kind = ?artifact.kind, "loaded class");
                self.register(name, artifact.bytecode)
            }
        };

        // Registered first so a constructor referring to its own class hits the cache.
        if let Err(err) = interpreter.run_static_constructor(&info) {
            tracing::warn!(class = name, error = %err, "static constructor failed");
            if let Some(failed) = self.types.borrow_mut().shift_remove(name) {
                self.failed
                    .borrow_mut()
                    .insert(name.to_string(), failed);
            }
            return Err(err);
        }
        tracing::debug!(class = name, "static constructor finished");

        Ok(info)
    }

    /// Register `bytecode` under `class_name` without running anything.
    ///
    /// If the name is already registered the existing descriptor is kept and
    /// returned.
    pub fn register(&self, class_name: &str, bytecode: Vec<u8>) -> Rc<TypeInfo> {
        self.types
            .borrow_mut()
            .entry(class_name.to_string())
            .or_insert_with(|| Rc::new(TypeInfo::new(class_name, bytecode)))
            .clone()
    }

    /// Cached descriptor, without loading.
    pub fn get(&self, class_name: &str) -> Option<Rc<TypeInfo>> {
        self.types.borrow().get(class_name).cloned()
    }

    /// True if `class_name` is cached.
    pub fn is_loaded(&self, class_name: &str) -> bool {
        self.types.borrow().contains_key(class_name)
    }

    /// Loaded class names, in load order.
    pub fn loaded_classes(&self) -> Vec<String> {
        self.types.borrow().keys().cloned().collect()
    }

    /// Number of loaded classes.
    pub fn len(&self) -> usize {
        self.types.borrow().len()
    }

    /// True when nothing is loaded.
    pub fn is_empty(&self) -> bool {
        self.types.borrow().is_empty()
    }
}

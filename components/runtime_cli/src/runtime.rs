//! Runtime root
//!
//! The Runtime owns everything the CLI needs to work with classes:
//! - The process-wide type registry and its class loader
//! - The object factory sharing that registry
//! - The interpreter that runs static constructors and class bodies

use std::fmt::Write as _;
use std::path::Path;
use std::rc::Rc;

use bytecode_system::decode_symbol_table;
use class_loader::{ClassLoader, LoaderConfig, TypeRegistry};
use core_types::{ImportsTable, ObjectRef, SymbolTable, TypeInfo};
use interpreter::{Interpreter, NullInterpreter};
use memory_manager::ObjectFactory;

use crate::error::{CliError, CliResult};

/// Owns the type registry, object factory, and interpreter
pub struct Runtime {
    factory: ObjectFactory,
    interpreter: Box<dyn Interpreter>,
}

impl Runtime {
    /// Create a runtime with an empty cache over `config`'s class path
    ///
    /// Static constructors and class bodies are handed to a
    /// [`NullInterpreter`] until another engine is attached.
    ///
    /// # Example
    /// ```
    /// use class_loader::LoaderConfig;
    /// use runtime_cli::Runtime;
    ///
    /// let runtime = Runtime::new(LoaderConfig::with_class_path("classes"));
    /// assert!(runtime.registry().is_empty());
    /// ```
    pub fn new(config: LoaderConfig) -> Self {
        let registry = Rc::new(TypeRegistry::new(ClassLoader::from_config(config)));
        Self {
            factory: ObjectFactory::new(registry),
            interpreter: Box::new(NullInterpreter::new()),
        }
    }

    /// Replace the interpreter
    pub fn with_interpreter(mut self, interpreter: impl Interpreter + 'static) -> Self {
        self.interpreter = Box::new(interpreter);
        self
    }

    /// The type registry
    pub fn registry(&self) -> &TypeRegistry {
        self.factory.registry()
    }

    /// The object factory
    pub fn factory(&self) -> &ObjectFactory {
        &self.factory
    }

    /// Load `class_name`, running its static constructor on first load
    ///
    /// # Errors
    /// Returns `CliError::Runtime` if the class cannot be loaded or its
    /// static constructor fails
    pub fn load_class(
        &mut self,
        class_name: &str,
        imports: Option<&ImportsTable>,
    ) -> CliResult<Rc<TypeInfo>> {
        let info = self
            .factory
            .registry()
            .get_or_load(class_name, imports, &mut *self.interpreter)?;
        Ok(info)
    }

    /// Construct an instance of `class_name`
    ///
    /// # Errors
    /// Returns `CliError::Runtime` if loading or running the class fails
    pub fn new_object(
        &mut self,
        class_name: &str,
        imports: Option<&ImportsTable>,
    ) -> CliResult<ObjectRef> {
        let obj = self
            .factory
            .new_ordinary(Some(class_name), imports, &mut *self.interpreter)?;
        Ok(obj)
    }

    /// Decode the symbol table stored in `path`
    ///
    /// # Errors
    /// Returns `CliError::Io` if the file cannot be read and
    /// `CliError::Runtime` if its contents are malformed
    pub fn decode_symbols(path: &Path) -> CliResult<SymbolTable> {
        let bytes = std::fs::read(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(decode_symbol_table(&bytes)?)
    }
}

/// Human-readable summary of a loaded class
pub fn describe_class(info: &TypeInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "class {}", info.class_name());
    let _ = writeln!(out, "bytecode {} bytes", info.bytecode_size());
    for name in info.static_variable_names() {
        if let Some(value) = info.static_variable(&name) {
            let _ = writeln!(out, "static {} = {}", name, value);
        }
    }
    out
}

/// One `slot name` line per symbol, in declaration order
pub fn describe_symbols(table: &SymbolTable) -> String {
    let mut out = String::new();
    for (name, slot) in table.iter() {
        let _ = writeln!(out, "{} {}", slot, name);
    }
    out
}

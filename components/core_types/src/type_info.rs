//! Loaded class descriptors.
//!
//! A [`TypeInfo`] is created once per class name when the class is first
//! loaded and lives for the rest of the process. It owns the class bytecode
//! and the class's own static storage.

use std::cell::RefCell;
use std::fmt;

use indexmap::IndexMap;

use crate::value::Register;

/// Local alias to fully-qualified class name mapping for one compilation unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportsTable {
    aliases: IndexMap<String, String>,
}

impl ImportsTable {
    /// Create an empty imports table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `alias` to `qualified_name`.
    pub fn insert(&mut self, alias: impl Into<String>, qualified_name: impl Into<String>) {
        self.aliases.insert(alias.into(), qualified_name.into());
    }

    /// Fully-qualified name for `alias`, if imported.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// `(alias, qualified_name)` pairs in import order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of aliases.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// True when no alias is defined.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<A: Into<String>, Q: Into<String>> FromIterator<(A, Q)> for ImportsTable {
    fn from_iter<I: IntoIterator<Item = (A, Q)>>(iter: I) -> Self {
        let mut table = ImportsTable::new();
        for (alias, qualified) in iter {
            table.insert(alias, qualified);
        }
        table
    }
}

/// Cached descriptor of a loaded class.
///
/// Static variables and imports are interior-mutable: the static constructor
/// populates them through a shared reference while the descriptor is already
/// registered.
pub struct TypeInfo {
    class_name: String,
    bytecode: Box<[u8]>,
    static_variables: RefCell<IndexMap<String, Register>>,
    imports_table: RefCell<ImportsTable>,
}

impl TypeInfo {
    /// Create a descriptor with empty static storage and no imports.
    pub fn new(class_name: impl Into<String>, bytecode: Vec<u8>) -> Self {
        Self {
            class_name: class_name.into(),
            bytecode: bytecode.into_boxed_slice(),
            static_variables: RefCell::new(IndexMap::new()),
            imports_table: RefCell::new(ImportsTable::new()),
        }
    }

    /// Canonical class name; the registry key.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Class bytecode, exactly as loaded.
    pub fn bytecode(&self) -> &[u8] {
        &self.bytecode
    }

    /// Length of the bytecode in bytes.
    pub fn bytecode_size(&self) -> usize {
        self.bytecode.len()
    }

    /// Read a static slot.
    pub fn static_variable(&self, name: &str) -> Option<Register> {
        self.static_variables.borrow().get(name).cloned()
    }

    /// Write a static slot, creating it if needed.
    pub fn set_static_variable(&self, name: impl Into<String>, value: Register) {
        self.static_variables.borrow_mut().insert(name.into(), value);
    }

    /// Names of the populated static slots, in creation order.
    pub fn static_variable_names(&self) -> Vec<String> {
        self.static_variables.borrow().keys().cloned().collect()
    }

    /// Snapshot of the class imports.
    pub fn imports(&self) -> ImportsTable {
        self.imports_table.borrow().clone()
    }

    /// Record an import declared by this class.
    pub fn add_import(&self, alias: impl Into<String>, qualified_name: impl Into<String>) {
        self.imports_table
            .borrow_mut()
            .insert(alias, qualified_name);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("class_name", &self.class_name)
            .field("bytecode_size", &self.bytecode.len())
            .field("static_variables", &self.static_variables.borrow())
            .field("imports_table", &self.imports_table.borrow())
            .finish()
    }
}

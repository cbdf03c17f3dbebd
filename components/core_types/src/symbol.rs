//! Name to slot bindings for a compilation unit.

use indexmap::IndexMap;

/// First slot handed out by the symbol table decoder. Slot 0 is reserved.
pub const FIRST_SLOT: u32 = 1;

/// Ordered mapping from symbol name to register slot.
///
/// Iteration order is the order the names were declared in bytecode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    slots: IndexMap<String, u32>,
}

impl SymbolTable {
    /// Create an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `slot`. Rebinding keeps the original position.
    pub fn insert(&mut self, name: impl Into<String>, slot: u32) {
        self.slots.insert(name.into(), slot);
    }

    /// Slot bound to `name`.
    pub fn slot(&self, name: &str) -> Option<u32> {
        self.slots.get(name).copied()
    }

    /// Names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// `(name, slot)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of bound names.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

//! Object property storage.
//!
//! Properties are kept in insertion order. Each one is flagged enumerable or
//! non-enumerable; builtin accessors are stored non-enumerable so user-visible
//! key listings never include them.

use indexmap::IndexMap;

use crate::value::Register;

/// A single property slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Stored value
    pub value: Register,
    /// Whether the property appears in key enumeration
    pub enumerable: bool,
}

/// Insertion-ordered property map owned by one object.
#[derive(Debug, Clone, Default)]
pub struct PropertyMap {
    entries: IndexMap<String, Property>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an enumerable property, replacing any existing value.
    pub fn insert(&mut self, name: impl Into<String>, value: Register) {
        self.put(name.into(), value, true);
    }

    /// Insert a property that is hidden from key enumeration.
    pub fn insert_non_enumerable(&mut self, name: impl Into<String>, value: Register) {
        self.put(name.into(), value, false);
    }

    fn put(&mut self, name: String, value: Register, enumerable: bool) {
        self.entries.insert(name, Property { value, enumerable });
    }

    /// Look up a property value, enumerable or not.
    pub fn get(&self, name: &str) -> Option<&Register> {
        self.entries.get(name).map(|p| &p.value)
    }

    /// Look up the full property slot.
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.entries.get(name)
    }

    /// Returns true if a property with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Remove a property, preserving the order of the remaining ones.
    pub fn remove(&mut self, name: &str) -> Option<Register> {
        self.entries.shift_remove(name).map(|p| p.value)
    }

    /// Enumerable keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, p)| p.enumerable)
            .map(|(k, _)| k.as_str())
    }

    /// Every key, including non-enumerable ones.
    pub fn all_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of enumerable properties.
    pub fn len(&self) -> usize {
        self.entries.values().filter(|p| p.enumerable).count()
    }

    /// Number of properties including non-enumerable ones.
    pub fn len_all(&self) -> usize {
        self.entries.len()
    }

    /// True when no enumerable property exists.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

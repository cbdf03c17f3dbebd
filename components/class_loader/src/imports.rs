//! Import alias resolution.

use core_types::ImportsTable;

/// Rewrite a locally scoped class alias into its fully-qualified name.
///
/// Names without a mapping, and lookups without a table, pass through
/// unchanged. Never fails.
///
/// # Example
///
/// ```
/// use class_loader::resolve_class_name;
/// use core_types::ImportsTable;
///
/// let mut imports = ImportsTable::new();
/// imports.insert("Foo", "Bar.Foo");
///
/// assert_eq!(resolve_class_name("Foo", Some(&imports)), "Bar.Foo");
/// assert_eq!(resolve_class_name("Baz", Some(&imports)), "Baz");
/// assert_eq!(resolve_class_name("Foo", None), "Foo");
/// ```
pub fn resolve_class_name<'a>(class_name: &'a str, imports: Option<&'a ImportsTable>) -> &'a str {
    imports
        .and_then(|table| table.get(class_name))
        .unwrap_or(class_name)
}

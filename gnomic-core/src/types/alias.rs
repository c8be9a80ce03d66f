//! Name/alias lookup shared by organisms and feature types

use indexmap::IndexMap;

/// Something that has a canonical name and a list of alternative spellings.
pub trait Aliased {
    fn name(&self) -> &str;

    fn aliases(&self) -> &[String];

    /// The spelling used when writing notation back out: the first alias, else the name.
    fn default_alias(&self) -> &str {
        self.aliases()
            .first()
            .map(String::as_str)
            .unwrap_or_else(|| self.name())
    }
}

/// Build a lookup table keyed by both canonical names and aliases.
///
/// Later entries win when two items claim the same key.
pub fn alias_table<T: Aliased + Clone>(items: &[T]) -> IndexMap<String, T> {
    let mut table = IndexMap::with_capacity(items.len());
    for item in items {
        table.insert(item.name().to_string(), item.clone());
        for alias in item.aliases() {
            table.insert(alias.clone(), item.clone());
        }
    }
    table
}

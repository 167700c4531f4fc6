// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration table recording the declared type of every registered item.

use crate::domain::config_key::normalize_group;
use crate::domain::ConfigValueType;
use std::collections::HashMap;

/// Maps group → item → declared [`ConfigValueType`].
///
/// Entries are write-once: inserting a pair that is already present leaves the
/// original declaration in place.
///
/// # Examples
///
/// ```
/// use inicfg::domain::{ConfigValueType, RegistrationTable};
///
/// let mut table = RegistrationTable::new();
/// assert!(table.insert("groupName", "key1", ConfigValueType::String));
/// assert!(!table.insert("groupName", "key1", ConfigValueType::Integer));
/// assert_eq!(table.lookup("groupName", "key1"), ConfigValueType::String);
/// assert_eq!(table.lookup("groupName", "key2"), ConfigValueType::Undefined);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RegistrationTable {
    groups: HashMap<String, HashMap<String, ConfigValueType>>,
}

impl RegistrationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration, returning `false` if the pair was already present.
    ///
    /// `Undefined` is never recorded.
    pub fn insert(&mut self, group: &str, item: &str, value_type: ConfigValueType) -> bool {
        if !value_type.is_defined() {
            return false;
        }
        let items = self
            .groups
            .entry(normalize_group(group).to_string())
            .or_default();
        if items.contains_key(item) {
            return false;
        }
        items.insert(item.to_string(), value_type);
        true
    }

    /// Returns the declared type, or `Undefined` for unregistered pairs.
    pub fn lookup(&self, group: &str, item: &str) -> ConfigValueType {
        self.groups
            .get(normalize_group(group))
            .and_then(|items| items.get(item))
            .copied()
            .unwrap_or_default()
    }

    /// Returns `true` if the pair has been registered.
    pub fn contains(&self, group: &str, item: &str) -> bool {
        self.lookup(group, item).is_defined()
    }

    /// Iterates over all `(group, item, type)` declarations in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, ConfigValueType)> {
        self.groups.iter().flat_map(|(group, items)| {
            items
                .iter()
                .map(move |(item, ty)| (group.as_str(), item.as_str(), *ty))
        })
    }

    /// Returns the number of registered items.
    pub fn len(&self) -> usize {
        self.groups.values().map(HashMap::len).sum()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every declaration.
    pub fn clear(&mut self) {
        self.groups.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_type() {
        let mut table = RegistrationTable::new();
        assert!(table.insert("groupName", "key1", ConfigValueType::String));
        assert!(table.insert("groupName", "key2", ConfigValueType::String));
        assert!(!table.insert("groupName", "key1", ConfigValueType::String));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_is_registered() {
        let mut table = RegistrationTable::new();
        table.insert("groupName", "key1", ConfigValueType::String);

        assert!(table.contains("groupName", "key1"));
        assert!(!table.contains("groupName", "key2"));
        assert!(!table.contains("otherGroup", "key1"));
    }

    #[test]
    fn test_get_registered_type() {
        let mut table = RegistrationTable::new();
        table.insert("groupName", "key1", ConfigValueType::String);
        table.insert("groupName", "key2", ConfigValueType::Integer);

        assert_eq!(table.lookup("groupName", "key1"), ConfigValueType::String);
        assert_eq!(table.lookup("groupName", "key2"), ConfigValueType::Integer);
    }

    #[test]
    fn test_undefined_is_not_recorded() {
        let mut table = RegistrationTable::new();
        assert!(!table.insert("g", "k", ConfigValueType::Undefined));
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_group_is_default() {
        let mut table = RegistrationTable::new();
        table.insert("", "k", ConfigValueType::Float);
        assert_eq!(table.lookup("DEFAULT", "k"), ConfigValueType::Float);
    }

    #[test]
    fn test_iter_and_clear() {
        let mut table = RegistrationTable::new();
        table.insert("a", "x", ConfigValueType::Boolean);
        table.insert("b", "y", ConfigValueType::StringArray);

        let mut entries: Vec<_> = table.iter().collect();
        entries.sort();
        assert_eq!(
            entries,
            vec![
                ("a", "x", ConfigValueType::Boolean),
                ("b", "y", ConfigValueType::StringArray)
            ]
        );

        table.clear();
        assert!(table.is_empty());
    }
}

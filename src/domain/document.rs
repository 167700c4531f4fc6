// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed document produced by a [`ConfigParser`](crate::ports::ConfigParser).
//!
//! A `TypedDocument` is an ordered two-level map: group name to item name to
//! [`ConfigValue`]. It knows nothing about registrations.

use crate::domain::config_key::normalize_group;
use crate::domain::ConfigValue;
use std::collections::BTreeMap;

/// An ordered (group, item) → value document.
///
/// # Examples
///
/// ```
/// use inicfg::domain::{ConfigValue, TypedDocument};
///
/// let mut doc = TypedDocument::new();
/// doc.set("server", "port", ConfigValue::from(8080));
///
/// assert_eq!(doc.get("server", "port"), Some(&ConfigValue::Integer(8080)));
/// assert_eq!(doc.get("server", "host"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedDocument {
    groups: BTreeMap<String, BTreeMap<String, ConfigValue>>,
}

impl TypedDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored at (group, item), if any.
    ///
    /// An empty group name addresses `DEFAULT`.
    pub fn get(&self, group: &str, item: &str) -> Option<&ConfigValue> {
        self.groups
            .get(normalize_group(group))
            .and_then(|items| items.get(item))
    }

    /// Stores a value at (group, item), returning the value it replaced.
    pub fn set(
        &mut self,
        group: &str,
        item: impl Into<String>,
        value: ConfigValue,
    ) -> Option<ConfigValue> {
        self.groups
            .entry(normalize_group(group).to_string())
            .or_default()
            .insert(item.into(), value)
    }

    /// Returns `true` if a value is stored at (group, item).
    pub fn contains(&self, group: &str, item: &str) -> bool {
        self.get(group, item).is_some()
    }

    /// Returns `true` if the group exists.
    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(normalize_group(group))
    }

    /// Iterates over group names in order.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Iterates over the items of one group in order.
    pub fn items<'a>(&'a self, group: &str) -> impl Iterator<Item = (&'a str, &'a ConfigValue)> {
        self.groups
            .get(normalize_group(group))
            .into_iter()
            .flat_map(|items| items.iter().map(|(k, v)| (k.as_str(), v)))
    }

    /// Returns the total number of items across all groups.
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    /// Returns `true` if the document holds no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key type addressing one item inside one group.
//!
//! This module provides the `ConfigKey` type, which pairs an INI group (section)
//! with an item name. An empty group name is normalized to [`DEFAULT_GROUP`].

use std::fmt;

/// The group used when a caller passes an empty group name.
pub const DEFAULT_GROUP: &str = "DEFAULT";

/// Normalizes a group name, mapping `""` to [`DEFAULT_GROUP`].
///
/// # Examples
///
/// ```
/// use inicfg::domain::config_key::normalize_group;
///
/// assert_eq!(normalize_group(""), "DEFAULT");
/// assert_eq!(normalize_group("server"), "server");
/// ```
pub fn normalize_group(group: &str) -> &str {
    if group.is_empty() {
        DEFAULT_GROUP
    } else {
        group
    }
}

/// A (group, item) pair identifying one configuration entry.
///
/// Both parts are case-sensitive.
///
/// # Examples
///
/// ```
/// use inicfg::domain::ConfigKey;
///
/// let key = ConfigKey::new("database", "host");
/// assert_eq!(key.group(), "database");
/// assert_eq!(key.item(), "host");
/// assert_eq!(key.to_string(), "database.host");
///
/// let key = ConfigKey::new("", "debug");
/// assert_eq!(key.group(), "DEFAULT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConfigKey {
    group: String,
    item: String,
}

impl ConfigKey {
    /// Creates a new key, normalizing an empty group to [`DEFAULT_GROUP`].
    pub fn new(group: impl AsRef<str>, item: impl Into<String>) -> Self {
        ConfigKey {
            group: normalize_group(group.as_ref()).to_string(),
            item: item.into(),
        }
    }

    /// Returns the group (INI section) name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Returns the item name.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Splits the key into its group and item.
    pub fn into_parts(self) -> (String, String) {
        (self.group, self.item)
    }
}

impl<G: AsRef<str>, I: Into<String>> From<(G, I)> for ConfigKey {
    fn from((group, item): (G, I)) -> Self {
        ConfigKey::new(group, item)
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.group, self.item)
    }
}

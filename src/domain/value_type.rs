// SPDX-License-Identifier: MIT OR Apache-2.0

//! The closed set of value kinds an item can be registered with.

use crate::domain::ConfigValue;
use std::fmt;

/// The declared type of a registered configuration item.
///
/// `Undefined` is returned by lookups for items that were never registered; it
/// is never stored in a registration table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ConfigValueType {
    /// A plain string.
    String,
    /// A signed 64-bit integer.
    Integer,
    /// A 64-bit float.
    Float,
    /// A boolean.
    Boolean,
    /// An ordered list of strings.
    StringArray,
    /// Not registered.
    #[default]
    Undefined,
}

impl ConfigValueType {
    /// Returns the zero value of this kind, or `None` for `Undefined`.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::{ConfigValue, ConfigValueType};
    ///
    /// assert_eq!(ConfigValueType::Integer.zero_value(), Some(ConfigValue::Integer(0)));
    /// assert_eq!(ConfigValueType::Undefined.zero_value(), None);
    /// ```
    pub fn zero_value(self) -> Option<ConfigValue> {
        match self {
            ConfigValueType::String => Some(ConfigValue::String(String::new())),
            ConfigValueType::Integer => Some(ConfigValue::Integer(0)),
            ConfigValueType::Float => Some(ConfigValue::Float(0.0)),
            ConfigValueType::Boolean => Some(ConfigValue::Boolean(false)),
            ConfigValueType::StringArray => Some(ConfigValue::Array(Vec::new())),
            ConfigValueType::Undefined => None,
        }
    }

    /// Returns `true` unless this is `Undefined`.
    pub fn is_defined(self) -> bool {
        self != ConfigValueType::Undefined
    }
}

impl fmt::Display for ConfigValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConfigValueType::String => "string",
            ConfigValueType::Integer => "integer",
            ConfigValueType::Float => "float",
            ConfigValueType::Boolean => "boolean",
            ConfigValueType::StringArray => "string array",
            ConfigValueType::Undefined => "undefined",
        };
        f.write_str(name)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type holding the parsed, typed content of one INI entry.
//!
//! This module provides the `ConfigValue` enum stored in a
//! [`TypedDocument`](crate::domain::TypedDocument), and the [`FromConfigValue`]
//! trait that typed getters use to convert a value back into a Rust type.

use crate::domain::ConfigValueType;
use std::collections::BTreeMap;
use std::fmt;

/// A dynamically-typed configuration value.
///
/// # Examples
///
/// ```
/// use inicfg::domain::{ConfigValue, ConfigValueType};
///
/// let value = ConfigValue::from(42);
/// assert_eq!(value.as_integer(), Some(42));
/// assert_eq!(value.value_type(), Some(ConfigValueType::Integer));
///
/// let list = ConfigValue::from(vec!["a", "b"]);
/// assert_eq!(list.to_string_array(), Some(vec!["a".to_string(), "b".to_string()]));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigValue {
    /// A string scalar.
    String(String),
    /// An integer scalar.
    Integer(i64),
    /// A float scalar.
    Float(f64),
    /// A boolean scalar.
    Boolean(bool),
    /// An ordered list of values.
    Array(Vec<ConfigValue>),
    /// A nested table of named values.
    Table(BTreeMap<String, ConfigValue>),
}

impl ConfigValue {
    /// Returns the registrable kind of this value.
    ///
    /// Any array maps to [`ConfigValueType::StringArray`] since every element
    /// has a string form. Tables have no registrable kind.
    pub fn value_type(&self) -> Option<ConfigValueType> {
        match self {
            ConfigValue::String(_) => Some(ConfigValueType::String),
            ConfigValue::Integer(_) => Some(ConfigValueType::Integer),
            ConfigValue::Float(_) => Some(ConfigValueType::Float),
            ConfigValue::Boolean(_) => Some(ConfigValueType::Boolean),
            ConfigValue::Array(_) => Some(ConfigValueType::StringArray),
            ConfigValue::Table(_) => None,
        }
    }

    /// Returns a short name of the runtime kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConfigValue::String(_) => "string",
            ConfigValue::Integer(_) => "integer",
            ConfigValue::Float(_) => "float",
            ConfigValue::Boolean(_) => "boolean",
            ConfigValue::Array(_) => "array",
            ConfigValue::Table(_) => "table",
        }
    }

    /// Returns `true` for an empty string, array or table.
    pub fn is_empty(&self) -> bool {
        match self {
            ConfigValue::String(s) => s.is_empty(),
            ConfigValue::Array(items) => items.is_empty(),
            ConfigValue::Table(entries) => entries.is_empty(),
            ConfigValue::Integer(_) | ConfigValue::Float(_) | ConfigValue::Boolean(_) => false,
        }
    }

    /// Returns `true` if the value equals the zero value of its kind.
    ///
    /// ```
    /// use inicfg::domain::ConfigValue;
    ///
    /// assert!(ConfigValue::from(0).is_zero());
    /// assert!(ConfigValue::from("").is_zero());
    /// assert!(!ConfigValue::from(true).is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        match self {
            ConfigValue::Integer(i) => *i == 0,
            ConfigValue::Float(f) => *f == 0.0,
            ConfigValue::Boolean(b) => !*b,
            ConfigValue::String(_) | ConfigValue::Array(_) | ConfigValue::Table(_) => {
                self.is_empty()
            }
        }
    }

    /// Returns the string slice if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer scalar.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float if this is a float scalar.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ConfigValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Coerces every element of an array to its string form, keeping order.
    ///
    /// Returns `None` if the value is not an array.
    pub fn to_string_array(&self) -> Option<Vec<String>> {
        self.as_array()
            .map(|items| items.iter().map(ToString::to_string).collect())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<i64> for ConfigValue {
    fn from(i: i64) -> Self {
        ConfigValue::Integer(i)
    }
}

impl From<i32> for ConfigValue {
    fn from(i: i32) -> Self {
        ConfigValue::Integer(i64::from(i))
    }
}

impl From<f64> for ConfigValue {
    fn from(f: f64) -> Self {
        ConfigValue::Float(f)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Boolean(b)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Array(items)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::Array(items.into_iter().map(ConfigValue::String).collect())
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(items: Vec<&str>) -> Self {
        ConfigValue::Array(items.into_iter().map(ConfigValue::from).collect())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::String(s) => f.write_str(s),
            ConfigValue::Integer(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{}", x),
            ConfigValue::Boolean(b) => write!(f, "{}", b),
            ConfigValue::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
            ConfigValue::Table(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} = {}", key, value)?;
                }
                f.write_str("}")
            }
        }
    }
}

/// Conversion from a stored [`ConfigValue`] into the Rust type a getter returns.
///
/// Each implementation is tied to exactly one [`ConfigValueType`]; the registry
/// refuses to convert an item registered under a different kind.
pub trait FromConfigValue: Sized + Default {
    /// The kind this type is read as.
    const VALUE_TYPE: ConfigValueType;

    /// Converts the value, or returns `None` if its runtime kind does not fit.
    fn from_config_value(value: &ConfigValue) -> Option<Self>;
}

impl FromConfigValue for String {
    const VALUE_TYPE: ConfigValueType = ConfigValueType::String;

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromConfigValue for i64 {
    const VALUE_TYPE: ConfigValueType = ConfigValueType::Integer;

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromConfigValue for f64 {
    const VALUE_TYPE: ConfigValueType = ConfigValueType::Float;

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromConfigValue for bool {
    const VALUE_TYPE: ConfigValueType = ConfigValueType::Boolean;

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        value.as_bool()
    }
}

impl FromConfigValue for Vec<String> {
    const VALUE_TYPE: ConfigValueType = ConfigValueType::StringArray;

    fn from_config_value(value: &ConfigValue) -> Option<Self> {
        value.to_string_array()
    }
}

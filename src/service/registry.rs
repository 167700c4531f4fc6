// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration registry.
//!
//! This module provides [`ConfigRegistry`], which owns a loaded
//! [`TypedDocument`] together with a [`RegistrationTable`]. Callers register
//! every item they expect, each registration is checked against the document,
//! and typed getters only succeed for items registered under the same kind.

use crate::domain::config_key::normalize_group;
use crate::domain::{
    ConfigError, ConfigKey, ConfigValue, ConfigValueType, FromConfigValue, RegistrationTable,
    Result, TypedDocument,
};
use crate::ports::ConfigSource;

/// A registry of expected configuration items backed by a typed document.
///
/// The validity flag starts out `true` and is cleared permanently by the first
/// type mismatch or missing required item. Only loading a new document resets
/// it.
///
/// # Examples
///
/// ```rust
/// use inicfg::service::ConfigRegistry;
///
/// # fn main() -> inicfg::domain::Result<()> {
/// let mut config = ConfigRegistry::from_ini_str("[DEFAULT]\nint_val = 2\n")?;
///
/// config.register_integer("DEFAULT", "int_val", 42, false)?;
/// config.register_integer("DEFAULT", "other", 42, false)?;
///
/// assert_eq!(config.get_integer("DEFAULT", "int_val")?, 2);
/// assert_eq!(config.get_integer("DEFAULT", "other")?, 42);
/// assert!(config.get_string("DEFAULT", "int_val").is_err());
/// assert!(config.is_config_valid());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    document: TypedDocument,
    registrations: RegistrationTable,
    valid: bool,
    source_name: Option<String>,
}

impl ConfigRegistry {
    /// Creates a registry with an empty document and no source.
    ///
    /// Every registration on such a registry fills in its default.
    pub fn new() -> Self {
        Self {
            document: TypedDocument::new(),
            registrations: RegistrationTable::new(),
            valid: true,
            source_name: None,
        }
    }

    /// Creates a registry over an already parsed document.
    pub fn from_document(document: TypedDocument) -> Self {
        Self {
            document,
            source_name: Some("document".to_string()),
            ..Self::new()
        }
    }

    /// Creates a registry by loading a configuration source.
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self> {
        let mut registry = Self::new();
        registry.load_from(source)?;
        Ok(registry)
    }

    /// Creates a registry from INI text.
    #[cfg(feature = "ini")]
    pub fn from_ini_str(content: &str) -> Result<Self> {
        Self::from_source(&crate::adapters::IniStringSource::new(content))
    }

    /// Reads and parses the INI file at `path` and makes it the backing document.
    ///
    /// On failure the registry is left exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::FileReadFailed`] - the file is missing or unreadable
    /// * [`ConfigError::ParseFailed`] - the file is not valid INI
    #[cfg(feature = "ini")]
    pub fn init_config(&mut self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = path.as_ref();
        let adapter = crate::adapters::IniFileAdapter::from_file(path).map_err(|e| {
            tracing::warn!("Cannot open configuration file '{}': {}", path.display(), e);
            e
        })?;
        self.load_from(&adapter)
    }

    /// Loads a source and makes its document the backing store.
    ///
    /// All registrations are dropped and the validity flag is reset. On failure
    /// the registry is left exactly as it was.
    pub fn load_from(&mut self, source: &dyn ConfigSource) -> Result<()> {
        let document = source.load().map_err(|e| {
            tracing::warn!("Failed to load configuration from '{}': {}", source.name(), e);
            e
        })?;

        tracing::info!(
            "Loaded {} configuration items from '{}'",
            document.len(),
            source.name()
        );

        self.document = document;
        self.registrations.clear();
        self.valid = true;
        self.source_name = Some(source.name().to_string());
        Ok(())
    }

    /// Returns `true` once a document has been loaded.
    pub fn is_initialized(&self) -> bool {
        self.source_name.is_some()
    }

    /// Returns the name of the source the document was loaded from.
    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Returns the backing document, including filled-in defaults.
    pub fn document(&self) -> &TypedDocument {
        &self.document
    }

    /// Returns the registration table.
    pub fn registrations(&self) -> &RegistrationTable {
        &self.registrations
    }

    /// Returns `false` once any type mismatch or missing required item was seen.
    pub fn is_config_valid(&self) -> bool {
        self.valid
    }

    /// Returns `true` if the registration table has an entry for (group, item).
    pub fn is_registered(&self, group: &str, item: &str) -> bool {
        self.registrations.contains(group, item)
    }

    /// Returns the declared type of (group, item), or `Undefined`.
    pub fn registered_type(&self, group: &str, item: &str) -> ConfigValueType {
        self.registrations.lookup(group, item)
    }

    /// Checks whether the document value at (group, item) may be registered as `declared`.
    ///
    /// An absent value is always compatible. An array is compatible only with
    /// `StringArray`; a scalar only with its own kind. Tables are never
    /// compatible.
    pub fn check_type(&self, group: &str, item: &str, declared: ConfigValueType) -> bool {
        match self.document.get(group, item) {
            None => true,
            Some(ConfigValue::Array(_)) => declared == ConfigValueType::StringArray,
            Some(ConfigValue::String(_)) => declared == ConfigValueType::String,
            Some(ConfigValue::Integer(_)) => declared == ConfigValueType::Integer,
            Some(ConfigValue::Float(_)) => declared == ConfigValueType::Float,
            Some(ConfigValue::Boolean(_)) => declared == ConfigValueType::Boolean,
            Some(ConfigValue::Table(_)) => false,
        }
    }

    /// Registers (group, item) with a declared type and an optional default.
    ///
    /// Steps, in order:
    ///
    /// 1. an empty group becomes `DEFAULT`
    /// 2. the existing document value must fit `declared`
    /// 3. the pair must not be registered yet
    /// 4. the declaration is recorded
    /// 5. an absent value is filled with `default` (or the kind's zero value)
    /// 6. a required item must resolve to a value that is not blank
    ///
    /// A required item counts as blank when the document holds an empty string
    /// or array, or when it was filled from a zero default (`""`, `0`, `0.0`,
    /// `false`, `[]`).
    ///
    /// # Errors
    ///
    /// * [`ConfigError::InvalidDefault`] - `default` is not of kind `declared`,
    ///   or `declared` is `Undefined`
    /// * [`ConfigError::TypeMismatch`] - the document value has another kind;
    ///   clears the validity flag
    /// * [`ConfigError::AlreadyRegistered`] - nothing is changed
    /// * [`ConfigError::RequiredMissing`] - the item stays registered but the
    ///   validity flag is cleared
    pub fn register(
        &mut self,
        group: &str,
        item: &str,
        declared: ConfigValueType,
        default: Option<ConfigValue>,
        required: bool,
    ) -> Result<()> {
        let group = normalize_group(group);
        let key = ConfigKey::new(group, item);

        let default = match default {
            Some(value) if value.value_type() == Some(declared) => value,
            None if declared.is_defined() => declared
                .zero_value()
                .ok_or_else(|| ConfigError::InvalidDefault {
                    key: key.clone(),
                    declared,
                })?,
            _ => return Err(ConfigError::InvalidDefault { key, declared }),
        };

        if !self.check_type(group, item, declared) {
            let found = self
                .document
                .get(group, item)
                .map(ConfigValue::kind_name)
                .unwrap_or_default()
                .to_string();
            return Err(self.invalidate(ConfigError::TypeMismatch {
                key,
                declared,
                found,
            }));
        }

        self.register_type(&key, declared)?;

        let filled = !self.document.contains(group, item);
        if filled {
            tracing::debug!("Using default value '{}' for '{}'", default, key);
            self.document.set(group, item, default);
        }

        if required {
            let satisfied = match self.document.get(group, item) {
                Some(value) if filled => !value.is_zero(),
                Some(value) => !value.is_empty(),
                None => false,
            };
            if !satisfied {
                return Err(self.invalidate(ConfigError::RequiredMissing { key }));
            }
        }

        Ok(())
    }

    /// Registers a string item.
    pub fn register_string(
        &mut self,
        group: &str,
        item: &str,
        default: &str,
        required: bool,
    ) -> Result<()> {
        self.register(
            group,
            item,
            ConfigValueType::String,
            Some(ConfigValue::from(default)),
            required,
        )
    }

    /// Registers an integer item.
    pub fn register_integer(
        &mut self,
        group: &str,
        item: &str,
        default: i64,
        required: bool,
    ) -> Result<()> {
        self.register(
            group,
            item,
            ConfigValueType::Integer,
            Some(ConfigValue::from(default)),
            required,
        )
    }

    /// Registers a float item.
    pub fn register_float(
        &mut self,
        group: &str,
        item: &str,
        default: f64,
        required: bool,
    ) -> Result<()> {
        self.register(
            group,
            item,
            ConfigValueType::Float,
            Some(ConfigValue::from(default)),
            required,
        )
    }

    /// Registers a boolean item.
    pub fn register_boolean(
        &mut self,
        group: &str,
        item: &str,
        default: bool,
        required: bool,
    ) -> Result<()> {
        self.register(
            group,
            item,
            ConfigValueType::Boolean,
            Some(ConfigValue::from(default)),
            required,
        )
    }

    /// Registers a string array item.
    pub fn register_string_array<I, S>(
        &mut self,
        group: &str,
        item: &str,
        default: I,
        required: bool,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let default = default
            .into_iter()
            .map(|s| ConfigValue::String(s.into()))
            .collect::<Vec<_>>();
        self.register(
            group,
            item,
            ConfigValueType::StringArray,
            Some(ConfigValue::Array(default)),
            required,
        )
    }

    /// Reads (group, item) as `T`.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::NotRegistered`] - the item was never registered
    /// * [`ConfigError::KindMismatch`] - the item was registered as another kind
    ///
    /// Use `unwrap_or_default()` to get the kind's zero value on failure.
    pub fn get<T: FromConfigValue>(&self, group: &str, item: &str) -> Result<T> {
        let key = ConfigKey::new(group, item);
        let registered = self.registrations.lookup(key.group(), key.item());

        if !registered.is_defined() {
            return Err(ConfigError::NotRegistered { key });
        }
        if registered != T::VALUE_TYPE {
            return Err(ConfigError::KindMismatch {
                key,
                registered,
                requested: T::VALUE_TYPE,
            });
        }

        match self.document.get(key.group(), key.item()) {
            None => Ok(T::default()),
            Some(value) => T::from_config_value(value).ok_or_else(|| {
                ConfigError::TypeMismatch {
                    found: value.kind_name().to_string(),
                    key,
                    declared: registered,
                }
            }),
        }
    }

    /// Reads a string item.
    pub fn get_string(&self, group: &str, item: &str) -> Result<String> {
        self.get(group, item)
    }

    /// Reads an integer item.
    pub fn get_integer(&self, group: &str, item: &str) -> Result<i64> {
        self.get(group, item)
    }

    /// Reads a float item.
    pub fn get_float(&self, group: &str, item: &str) -> Result<f64> {
        self.get(group, item)
    }

    /// Reads a boolean item.
    pub fn get_boolean(&self, group: &str, item: &str) -> Result<bool> {
        self.get(group, item)
    }

    /// Reads a string array item; non-string elements are converted to text.
    pub fn get_string_array(&self, group: &str, item: &str) -> Result<Vec<String>> {
        self.get(group, item)
    }

    /// Records the declared type without looking at the document.
    fn register_type(&mut self, key: &ConfigKey, declared: ConfigValueType) -> Result<()> {
        if !self.registrations.insert(key.group(), key.item(), declared) {
            let registered = self.registrations.lookup(key.group(), key.item());
            tracing::warn!("'{}' is already registered as {}", key, registered);
            return Err(ConfigError::AlreadyRegistered {
                key: key.clone(),
                registered,
            });
        }
        tracing::debug!("Registered '{}' as {}", key, declared);
        Ok(())
    }

    /// Clears the validity flag and hands the error back.
    fn invalidate(&mut self, error: ConfigError) -> ConfigError {
        tracing::warn!("Invalid configuration: {}", error);
        self.valid = false;
        error
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

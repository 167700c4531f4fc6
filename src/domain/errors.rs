// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration crate.
//!
//! This module defines the errors that can occur while loading a configuration
//! file, registering expected items and reading typed values back out.
//! All errors use `thiserror` for proper error handling and conversion.

use crate::domain::{ConfigKey, ConfigValueType};
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Loading errors (`FileReadFailed`, `ParseFailed`, `AlreadyInitialized`) abort
/// the call that produced them. Registration errors are returned to the caller
/// and additionally degrade the registry's validity flag where noted. Getter
/// errors are purely local.
///
/// # Examples
///
/// ```
/// use inicfg::domain::{ConfigError, ConfigKey};
///
/// fn lookup() -> Result<String, ConfigError> {
///     Err(ConfigError::NotRegistered {
///         key: ConfigKey::new("server", "port"),
///     })
/// }
///
/// assert!(lookup().is_err());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file '{}': {source}", .path.display())]
    FileReadFailed {
        /// The path that was requested
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration text is not valid INI.
    #[error("Failed to parse configuration: {message}")]
    ParseFailed {
        /// The parser's error message
        message: String,
    },

    /// The process-wide configuration was already initialized.
    #[error("Configuration is already initialized")]
    AlreadyInitialized,

    /// The process-wide configuration has not been initialized yet.
    #[error("Configuration is not initialized")]
    NotInitialized,

    /// The value present in the document disagrees with the declared type.
    #[error("Type mismatch for '{key}': declared {declared}, document holds {found}")]
    TypeMismatch {
        /// The key being registered
        key: ConfigKey,
        /// The type the caller declared
        declared: ConfigValueType,
        /// A description of the value found in the document
        found: String,
    },

    /// The item was registered before.
    #[error("'{key}' is already registered as {registered}")]
    AlreadyRegistered {
        /// The key being registered
        key: ConfigKey,
        /// The type recorded by the first registration
        registered: ConfigValueType,
    },

    /// A required item has no value after defaulting.
    #[error("Required configuration item '{key}' is missing")]
    RequiredMissing {
        /// The missing key
        key: ConfigKey,
    },

    /// The default value given at registration does not have the declared kind.
    #[error("Default value for '{key}' is not of type {declared}")]
    InvalidDefault {
        /// The key being registered
        key: ConfigKey,
        /// The type the caller declared
        declared: ConfigValueType,
    },

    /// A typed getter was called for an item that was never registered.
    #[error("'{key}' is not registered")]
    NotRegistered {
        /// The requested key
        key: ConfigKey,
    },

    /// A typed getter was called with a kind other than the registered one.
    #[error("'{key}' is registered as {registered}, requested as {requested}")]
    KindMismatch {
        /// The requested key
        key: ConfigKey,
        /// The type recorded at registration
        registered: ConfigValueType,
        /// The type the getter asked for
        requested: ConfigValueType,
    },
}

impl ConfigError {
    /// Returns `true` for errors that flip a registry's validity flag.
    pub fn invalidates_config(&self) -> bool {
        matches!(
            self,
            ConfigError::TypeMismatch { .. } | ConfigError::RequiredMissing { .. }
        )
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_read_failed_error() {
        let error = ConfigError::FileReadFailed {
            path: PathBuf::from("/tmp/missing.ini"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/missing.ini"));
        assert!(message.contains("file not found"));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_parse_failed_error() {
        let error = ConfigError::ParseFailed {
            message: "line 1: missing bracket".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration: line 1: missing bracket"
        );
    }

    #[test]
    fn test_type_mismatch_error() {
        let error = ConfigError::TypeMismatch {
            key: ConfigKey::new("DEFAULT", "string_val"),
            declared: ConfigValueType::Integer,
            found: "string".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Type mismatch for 'DEFAULT.string_val': declared integer, document holds string"
        );
    }

    #[test]
    fn test_kind_mismatch_error() {
        let error = ConfigError::KindMismatch {
            key: ConfigKey::new("DEFAULT", "int_val"),
            registered: ConfigValueType::Integer,
            requested: ConfigValueType::String,
        };
        assert!(error.to_string().contains("registered as integer"));
        assert!(error.to_string().contains("requested as string"));
    }

    #[test]
    fn test_invalidates_config() {
        let key = ConfigKey::new("DEFAULT", "k");
        assert!(ConfigError::RequiredMissing { key: key.clone() }.invalidates_config());
        assert!(ConfigError::TypeMismatch {
            key: key.clone(),
            declared: ConfigValueType::Float,
            found: "boolean".to_string(),
        }
        .invalidates_config());
        assert!(!ConfigError::AlreadyRegistered {
            key: key.clone(),
            registered: ConfigValueType::Float,
        }
        .invalidates_config());
        assert!(!ConfigError::NotRegistered { key }.invalidates_config());
        assert!(!ConfigError::AlreadyInitialized.invalidates_config());
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value model, the document and registration table,
//! and the error type. It is independent of file formats and storage.

pub mod config_key;
pub mod config_value;
pub mod document;
pub mod errors;
pub mod registration;
pub mod value_type;

// Re-export commonly used types
pub use config_key::{ConfigKey, DEFAULT_GROUP};
pub use config_value::{ConfigValue, FromConfigValue};
pub use document::TypedDocument;
pub use errors::{ConfigError, Result};
pub use registration::RegistrationTable;
pub use value_type::ConfigValueType;

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed configuration registration on top of INI files.
//!
//! A program declares every configuration item it needs (group, item, type,
//! default, required) and this crate checks the declarations against the
//! loaded file, fills in defaults and hands out typed values.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `TypedDocument`,
//!   `RegistrationTable`, errors)
//! - **Ports**: Trait definitions for collaborators (`ConfigParser`, `ConfigSource`)
//! - **Adapters**: INI parsing and file/string sources
//! - **Service**: `ConfigRegistry`, which validates registrations and serves reads
//! - **Global**: an optional process-wide registry behind free functions
//!
//! # Value kinds
//!
//! Items are registered as one of five kinds: string, integer, float, boolean
//! or string array. A registration fails if the file already holds a value of
//! another kind, and a getter fails unless it asks for the registered kind.
//!
//! # Feature Flags
//!
//! - `ini`: Enable the INI parser and file adapters (default)
//!
//! # Quick Start
//!
//! ```rust
//! use inicfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let mut config = ConfigRegistry::from_ini_str(
//!     "[DEFAULT]\nint_val = 2\nstring_list = a,b,c\n",
//! )?;
//!
//! config.register_integer("DEFAULT", "int_val", 42, false)?;
//! config.register_string_array("DEFAULT", "string_list", ["x"], false)?;
//! config.register_boolean("DEFAULT", "verbose", false, false)?;
//!
//! assert!(config.is_config_valid());
//! assert_eq!(config.get_integer("DEFAULT", "int_val")?, 2);
//! assert_eq!(config.get_string_array("DEFAULT", "string_list")?, vec!["a", "b", "c"]);
//! assert!(!config.get_boolean("DEFAULT", "verbose")?);
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod global;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ConfigError, ConfigKey, ConfigValue, ConfigValueType, FromConfigValue, Result,
        TypedDocument,
    };
    pub use crate::ports::{ConfigParser, ConfigSource};
    pub use crate::service::ConfigRegistry;

    // Re-export adapters based on feature flags
    #[cfg(feature = "ini")]
    pub use crate::adapters::{IniFileAdapter, IniParser, IniStringSource};
}

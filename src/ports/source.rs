// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration source trait definition.
//!
//! This module defines the `ConfigSource` trait, the port through which a
//! [`ConfigRegistry`](crate::service::ConfigRegistry) obtains its backing
//! document. A source hides where the text lives (a file, an embedded string)
//! and which parser reads it.

use crate::domain::{Result, TypedDocument};

/// A trait for configuration sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that a source can be handed to the
/// process-wide registry.
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{ConfigValue, Result, TypedDocument};
/// use inicfg::ports::ConfigSource;
///
/// struct FixedSource;
///
/// impl ConfigSource for FixedSource {
///     fn name(&self) -> &str {
///         "fixed"
///     }
///
///     fn load(&self) -> Result<TypedDocument> {
///         let mut doc = TypedDocument::new();
///         doc.set("DEFAULT", "answer", ConfigValue::from(42));
///         Ok(doc)
///     }
/// }
///
/// let doc = FixedSource.load().unwrap();
/// assert_eq!(doc.get("DEFAULT", "answer"), Some(&ConfigValue::Integer(42)));
/// ```
pub trait ConfigSource: Send + Sync {
    /// Returns the name of this configuration source.
    ///
    /// This name is used for logging and error messages. It should be a short
    /// identifier like "ini-file" or "ini-string".
    fn name(&self) -> &str;

    /// Reads and parses the source into a fresh document.
    ///
    /// # Returns
    ///
    /// * `Ok(TypedDocument)` - The parsed document
    /// * `Err(ConfigError::FileReadFailed)` - The underlying storage could not be read
    /// * `Err(ConfigError::ParseFailed)` - The content is malformed
    fn load(&self) -> Result<TypedDocument>;
}

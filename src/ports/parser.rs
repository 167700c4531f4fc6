// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns raw configuration
//! text into a [`TypedDocument`]. The registry only consumes the resulting
//! document, so any format that maps onto flat (group, item) pairs can be
//! plugged in.

use crate::domain::{Result, TypedDocument};

/// A trait for parsing configuration text.
///
/// Implementations must report malformed input as
/// [`ConfigError::ParseFailed`](crate::domain::ConfigError::ParseFailed).
///
/// # Examples
///
/// ```rust
/// use inicfg::domain::{ConfigValue, Result, TypedDocument};
/// use inicfg::ports::ConfigParser;
///
/// struct SingleValueParser;
///
/// impl ConfigParser for SingleValueParser {
///     fn parse(&self, content: &str) -> Result<TypedDocument> {
///         let mut doc = TypedDocument::new();
///         doc.set("DEFAULT", "content", ConfigValue::from(content.trim()));
///         Ok(doc)
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["txt"]
///     }
/// }
///
/// let doc = SingleValueParser.parse(" hello ").unwrap();
/// assert_eq!(doc.get("DEFAULT", "content"), Some(&ConfigValue::from("hello")));
/// ```
pub trait ConfigParser {
    /// Parses configuration content into a typed document.
    ///
    /// # Arguments
    ///
    /// * `content` - The raw content of the configuration file
    ///
    /// # Returns
    ///
    /// * `Ok(TypedDocument)` - The parsed document
    /// * `Err(ConfigError::ParseFailed)` - The content is malformed
    fn parse(&self, content: &str) -> Result<TypedDocument>;

    /// Returns the file extensions supported by this parser, without the leading dot.
    fn supported_extensions(&self) -> &[&str];
}

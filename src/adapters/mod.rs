// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing configuration source implementations.
//!
//! This module contains concrete implementations of the parser and source
//! traits defined in the ports layer.

#[cfg(feature = "ini")]
pub mod ini_file;

// Re-export adapters based on feature flags
#[cfg(feature = "ini")]
pub use ini_file::{IniFileAdapter, IniParser, IniStringSource};

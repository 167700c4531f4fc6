// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration registry.
//!
//! This module contains [`ConfigRegistry`], the main interface for registering
//! and reading configuration items.

pub mod registry;

// Re-export commonly used types
pub use registry::ConfigRegistry;

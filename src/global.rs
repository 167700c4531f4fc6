// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process-wide configuration registry.
//!
//! Programs that want a single configuration for their whole lifetime can use
//! these free functions instead of passing a [`ConfigRegistry`] around. Every
//! call goes through one mutex, so initialization, registration and reads are
//! serialized.
//!
//! Call [`init_config`] once at start-up, register every item, then check
//! [`is_config_valid`] before entering the main loop.
//!
//! # Examples
//!
//! ```rust,no_run
//! use inicfg::global;
//!
//! # fn main() -> inicfg::domain::Result<()> {
//! global::init_config("/etc/myapp/config.ini")?;
//! let _ = global::register_string("server", "host", "localhost", false);
//! let _ = global::register_integer("server", "port", 8080, true);
//!
//! if !global::is_config_valid() {
//!     std::process::exit(1);
//! }
//!
//! let port = global::get_integer("server", "port")?;
//! # Ok(())
//! # }
//! ```

use crate::domain::{ConfigError, FromConfigValue, Result};
use crate::ports::ConfigSource;
use crate::service::ConfigRegistry;
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};

static CONFIG: Lazy<Mutex<Option<ConfigRegistry>>> = Lazy::new(|| Mutex::new(None));

fn lock() -> MutexGuard<'static, Option<ConfigRegistry>> {
    CONFIG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Loads the INI file at `path` into the process-wide registry.
///
/// # Errors
///
/// * [`ConfigError::AlreadyInitialized`] - a previous call succeeded
/// * [`ConfigError::FileReadFailed`] / [`ConfigError::ParseFailed`] - nothing
///   is initialized
#[cfg(feature = "ini")]
pub fn init_config(path: impl AsRef<std::path::Path>) -> Result<()> {
    let mut guard = lock();
    if guard.is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }
    let mut registry = ConfigRegistry::new();
    registry.init_config(path)?;
    *guard = Some(registry);
    Ok(())
}

/// Loads `source` into the process-wide registry.
///
/// Fails with [`ConfigError::AlreadyInitialized`] after a previous successful call.
pub fn init_config_from(source: &dyn ConfigSource) -> Result<()> {
    let mut guard = lock();
    if guard.is_some() {
        return Err(ConfigError::AlreadyInitialized);
    }
    *guard = Some(ConfigRegistry::from_source(source)?);
    Ok(())
}

/// Drops the process-wide registry so it can be initialized again.
///
/// Intended for test suites; production code initializes once.
pub fn reset_config() {
    *lock() = None;
}

/// Returns `true` once [`init_config`] or [`init_config_from`] succeeded.
pub fn is_initialized() -> bool {
    lock().is_some()
}

/// Returns the validity flag of the process-wide registry.
///
/// An uninitialized configuration is not valid.
pub fn is_config_valid() -> bool {
    lock().as_ref().is_some_and(ConfigRegistry::is_config_valid)
}

/// Runs `f` against the process-wide registry while holding its lock.
///
/// Fails with [`ConfigError::NotInitialized`] before initialization.
pub fn with_config<R>(f: impl FnOnce(&mut ConfigRegistry) -> R) -> Result<R> {
    lock().as_mut().map(f).ok_or(ConfigError::NotInitialized)
}

/// Registers a string item. See [`ConfigRegistry::register`].
pub fn register_string(group: &str, item: &str, default: &str, required: bool) -> Result<()> {
    with_config(|c| c.register_string(group, item, default, required))?
}

/// Registers an integer item. See [`ConfigRegistry::register`].
pub fn register_integer(group: &str, item: &str, default: i64, required: bool) -> Result<()> {
    with_config(|c| c.register_integer(group, item, default, required))?
}

/// Registers a float item. See [`ConfigRegistry::register`].
pub fn register_float(group: &str, item: &str, default: f64, required: bool) -> Result<()> {
    with_config(|c| c.register_float(group, item, default, required))?
}

/// Registers a boolean item. See [`ConfigRegistry::register`].
pub fn register_boolean(group: &str, item: &str, default: bool, required: bool) -> Result<()> {
    with_config(|c| c.register_boolean(group, item, default, required))?
}

/// Registers a string array item. See [`ConfigRegistry::register`].
pub fn register_string_array<I, S>(
    group: &str,
    item: &str,
    default: I,
    required: bool,
) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    with_config(|c| c.register_string_array(group, item, default, required))?
}

/// Reads (group, item) as `T`. See [`ConfigRegistry::get`].
pub fn get<T: FromConfigValue>(group: &str, item: &str) -> Result<T> {
    with_config(|c| c.get(group, item))?
}

/// Reads a string item.
pub fn get_string(group: &str, item: &str) -> Result<String> {
    get(group, item)
}

/// Reads an integer item.
pub fn get_integer(group: &str, item: &str) -> Result<i64> {
    get(group, item)
}

/// Reads a float item.
pub fn get_float(group: &str, item: &str) -> Result<f64> {
    get(group, item)
}

/// Reads a boolean item.
pub fn get_boolean(group: &str, item: &str) -> Result<bool> {
    get(group, item)
}

/// Reads a string array item.
pub fn get_string_array(group: &str, item: &str) -> Result<Vec<String>> {
    get(group, item)
}

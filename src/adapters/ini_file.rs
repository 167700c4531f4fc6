// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI configuration source adapter.
//!
//! This module provides the INI parser and the sources that feed it: a file on
//! disk and an in-memory string. Raw INI values are strings; the parser infers
//! booleans, integers, floats and comma-separated lists from their text.

use crate::domain::{ConfigError, ConfigValue, Result, TypedDocument, DEFAULT_GROUP};
use crate::ports::{ConfigParser, ConfigSource};
use configparser::ini::Ini;
use directories::ProjectDirs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maximum allowed file size for INI configuration files (10MB)
const MAX_INI_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// INI parser implementation.
///
/// Section names become groups and keys become items, both case-sensitive.
/// Keys that appear before the first section header belong to `DEFAULT`.
///
/// Values are typed from their text:
///
/// - `true` / `false` (any case) become booleans
/// - whole numbers fitting an `i64` become integers
/// - decimal or exponent numerals become floats
/// - `"quoted"` text becomes a string with the quotes removed
/// - text containing `,` becomes an array of the comma-separated parts
/// - anything else is a string
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniParser;
/// use inicfg::domain::ConfigValue;
/// use inicfg::ports::ConfigParser;
///
/// let parser = IniParser::new();
/// let doc = parser.parse("[server]\nport = 8080\nhosts = a,b\n").unwrap();
/// assert_eq!(doc.get("server", "port"), Some(&ConfigValue::Integer(8080)));
/// assert_eq!(doc.get("server", "hosts"), Some(&ConfigValue::from(vec!["a", "b"])));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IniParser;

impl IniParser {
    /// Creates a new INI parser.
    pub fn new() -> Self {
        IniParser
    }

    /// Infers the typed value of a raw INI value.
    fn infer_value(raw: &str) -> ConfigValue {
        let raw = raw.trim();
        if let Some(inner) = Self::unquote(raw) {
            return ConfigValue::String(inner.to_string());
        }
        if raw.contains(',') {
            return ConfigValue::Array(
                raw.split(',')
                    .map(str::trim)
                    .filter(|part| !part.is_empty())
                    .map(Self::infer_scalar)
                    .collect(),
            );
        }
        Self::infer_scalar(raw)
    }

    fn infer_scalar(raw: &str) -> ConfigValue {
        if let Some(inner) = Self::unquote(raw) {
            return ConfigValue::String(inner.to_string());
        }
        if raw.eq_ignore_ascii_case("true") {
            return ConfigValue::Boolean(true);
        }
        if raw.eq_ignore_ascii_case("false") {
            return ConfigValue::Boolean(false);
        }
        if let Ok(i) = raw.parse::<i64>() {
            return ConfigValue::Integer(i);
        }
        // f64 parsing also accepts "inf" and "nan"; those stay strings
        if Self::is_numeral(raw) {
            if let Ok(f) = raw.parse::<f64>() {
                return ConfigValue::Float(f);
            }
        }
        ConfigValue::String(raw.to_string())
    }

    fn is_numeral(raw: &str) -> bool {
        raw.chars().any(|c| c.is_ascii_digit())
            && raw
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
    }

    fn unquote(raw: &str) -> Option<&str> {
        if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
            Some(&raw[1..raw.len() - 1])
        } else {
            None
        }
    }
}

impl ConfigParser for IniParser {
    fn parse(&self, content: &str) -> Result<TypedDocument> {
        let mut ini = Ini::new_cs();
        ini.set_default_section(DEFAULT_GROUP);

        let sections = ini
            .read(content.to_string())
            .map_err(|message| ConfigError::ParseFailed { message })?;

        let mut doc = TypedDocument::new();
        for (group, items) in sections {
            for (item, raw) in items {
                let value = Self::infer_value(raw.as_deref().unwrap_or_default());
                doc.set(&group, item, value);
            }
        }
        Ok(doc)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["ini", "cfg", "conf"]
    }
}

/// Configuration source adapter for INI files.
///
/// The path is resolved when the adapter is created; the file itself is read
/// on every [`load`](ConfigSource::load).
///
/// # Examples
///
/// ```rust,no_run
/// use inicfg::adapters::IniFileAdapter;
/// use inicfg::ports::ConfigSource;
///
/// // Load from a specific file
/// let adapter = IniFileAdapter::from_file("/etc/myapp/config.ini").unwrap();
/// let doc = adapter.load().unwrap();
///
/// // Load from default OS location
/// let adapter = IniFileAdapter::from_default_location("myapp", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct IniFileAdapter {
    /// Canonical path to the INI file
    file_path: PathBuf,
    /// INI parser
    parser: IniParser,
}

impl IniFileAdapter {
    /// Creates a new INI file adapter from a specific file path.
    ///
    /// Fails with [`ConfigError::FileReadFailed`] if the path does not exist.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let canonical_path = file_path
            .canonicalize()
            .map_err(|source| ConfigError::FileReadFailed {
                path: file_path.clone(),
                source,
            })?;

        Ok(Self {
            file_path: canonical_path,
            parser: IniParser::new(),
        })
    }

    /// Creates a new INI file adapter for `config.ini` in the OS-appropriate
    /// configuration directory.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        Self::with_filename(app_name, qualifier, "config.ini")
    }

    /// Creates a new INI file adapter with a custom file name in the default location.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name
    /// * `qualifier` - The organization/qualifier
    /// * `filename` - The configuration file name (e.g., "settings.ini")
    pub fn with_filename(app_name: &str, qualifier: &str, filename: &str) -> Result<Self> {
        let proj_dirs = ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| {
            ConfigError::FileReadFailed {
                path: PathBuf::from(filename),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    "Failed to determine project directories",
                ),
            }
        })?;

        Self::from_file(proj_dirs.config_dir().join(filename))
    }

    /// Returns the path to the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn read_content(&self) -> Result<String> {
        let read_failed = |source| ConfigError::FileReadFailed {
            path: self.file_path.clone(),
            source,
        };

        let metadata = fs::metadata(&self.file_path).map_err(read_failed)?;
        if metadata.len() > MAX_INI_FILE_SIZE {
            return Err(read_failed(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Configuration file too large: {} bytes (max {} bytes)",
                    metadata.len(),
                    MAX_INI_FILE_SIZE
                ),
            )));
        }

        fs::read_to_string(&self.file_path).map_err(read_failed)
    }
}

impl ConfigSource for IniFileAdapter {
    fn name(&self) -> &str {
        "ini-file"
    }

    fn load(&self) -> Result<TypedDocument> {
        let content = self.read_content()?;
        tracing::debug!(
            "Read {} bytes from '{}'",
            content.len(),
            self.file_path.display()
        );
        self.parser.parse(&content)
    }
}

/// Configuration source holding INI text in memory.
///
/// # Examples
///
/// ```rust
/// use inicfg::adapters::IniStringSource;
/// use inicfg::domain::ConfigValue;
/// use inicfg::ports::ConfigSource;
///
/// let source = IniStringSource::new("[DEFAULT]\nint_val = 2\n");
/// let doc = source.load().unwrap();
/// assert_eq!(doc.get("DEFAULT", "int_val"), Some(&ConfigValue::Integer(2)));
/// ```
#[derive(Debug, Clone)]
pub struct IniStringSource {
    content: String,
    parser: IniParser,
}

impl IniStringSource {
    /// Creates a source from INI text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            parser: IniParser::new(),
        }
    }
}

impl ConfigSource for IniStringSource {
    fn name(&self) -> &str {
        "ini-string"
    }

    fn load(&self) -> Result<TypedDocument> {
        self.parser.parse(&self.content)
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// The configuration file used across the integration tests.
#[allow(dead_code)]
pub const TEST_INI: &str = "[DEFAULT]\n\
                            string_val = asdf.asdf\n\
                            int_val = 2\n\
                            float_val = 123.0\n\
                            string_list = a,b,c\n\
                            bool_value = true\n\
                            \n";

/// Writes `content` to a temporary file that lives as long as the returned handle.
#[allow(dead_code)]
pub fn write_ini(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    write!(file, "{}", content).expect("write temp file");
    file
}

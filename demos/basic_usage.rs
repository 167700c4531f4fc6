// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the configuration crate.
//!
//! This example demonstrates:
//! - Loading an INI file into a registry
//! - Registering items with defaults and required flags
//! - Reading typed values back
//! - Checking overall validity before starting work
//!
//! To run this example:
//! ```bash
//! cargo run --example basic_usage -- path/to/config.ini
//! ```
//!
//! Without an argument a built-in sample configuration is used.

use inicfg::prelude::*;

const SAMPLE: &str = "\
[server]
host = example.org
port = 8080
allowed = alpha,beta,gamma

[logging]
verbose = true
";

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => {
            let mut config = ConfigRegistry::new();
            config.init_config(&path)?;
            config
        }
        None => ConfigRegistry::from_ini_str(SAMPLE)?,
    };

    // Registration failures are logged and reflected in is_config_valid()
    let _ = config.register_string("server", "host", "localhost", true);
    let _ = config.register_integer("server", "port", 80, true);
    let _ = config.register_float("server", "timeout", 30.0, false);
    let _ = config.register_string_array("server", "allowed", Vec::<String>::new(), false);
    let _ = config.register_boolean("logging", "verbose", false, false);

    if !config.is_config_valid() {
        eprintln!("Configuration is invalid, see log output");
        std::process::exit(1);
    }

    println!("host    = {}", config.get_string("server", "host")?);
    println!("port    = {}", config.get_integer("server", "port")?);
    println!("timeout = {}", config.get_float("server", "timeout")?);
    println!("allowed = {:?}", config.get_string_array("server", "allowed")?);
    println!("verbose = {}", config.get_boolean("logging", "verbose")?);

    // Asking for the wrong kind is a local failure
    match config.get_string("server", "port") {
        Ok(value) => println!("unexpected: {}", value),
        Err(e) => println!("expected failure: {}", e),
    }

    Ok(())
}

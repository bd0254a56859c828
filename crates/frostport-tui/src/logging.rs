#![forbid(unsafe_code)]

//! Tracing setup for the portal binary.
//!
//! The terminal owns stdout, so log output goes to a file. The filter comes
//! from `FROSTPORT_LOG` (tracing `EnvFilter` syntax) and the destination from
//! `FROSTPORT_LOG_FILE`. With no filter set, logging stays off entirely.

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILE: &str = "frostport.log";

/// Install the global subscriber from the environment.
///
/// Returns quietly when `FROSTPORT_LOG` is unset or the log file cannot be
/// opened; the portal must run identically with logging disabled.
pub fn init_from_env() {
    let Ok(directives) = env::var("FROSTPORT_LOG") else {
        return;
    };
    let filter = match EnvFilter::try_new(&directives) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("Invalid FROSTPORT_LOG filter: {e}");
            return;
        }
    };

    let path = env::var("FROSTPORT_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Cannot open log file {path}: {e}");
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
}

//! Tracing initialization.
//!
//! The application logs through `tracing` everywhere; this module wires the
//! subscriber. Output goes to a file in the data directory rather than stderr
//! because stdout/stderr belong to the raw-mode terminal UI while the
//! application runs.
//!
//! # Level resolution
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` from the config file
//! 3. Default: `"info"`

use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file output.
///
/// Creates the data directory if needed and appends to `storysift.log` inside
/// it. Silently does nothing if the directory or file cannot be created, so a
/// missing home directory never keeps the application from starting.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_file())
    else {
        return;
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false);

    let _ = subscriber.try_init();
}

//! Platform path resolution.
//!
//! This module centralizes where the application keeps its files: the JSON
//! store and log file in the platform data directory, the optional config file
//! in the platform config directory. Resolution goes through the `directories`
//! crate; when no home directory can be determined (stripped-down containers),
//! everything falls back to a dotted directory under the working directory.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Fallback directory used when the platform directories cannot be resolved.
const FALLBACK_DIR: &str = ".storysift";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "storysift")
}

/// Returns the data directory for the JSON store and log file.
///
/// Typically `~/.local/share/storysift` on Linux.
#[must_use]
pub fn data_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR),
        |dirs| dirs.data_dir().to_path_buf(),
    )
}

/// Returns the path of the persistent key-value store file.
#[must_use]
pub fn store_file() -> PathBuf {
    data_dir().join("state.json")
}

/// Returns the path of the log file tracing output is written to.
#[must_use]
pub fn log_file() -> PathBuf {
    data_dir().join("storysift.log")
}

/// Returns the path of the optional TOML configuration file.
///
/// Typically `~/.config/storysift/config.toml` on Linux.
#[must_use]
pub fn config_file() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from(FALLBACK_DIR).join("config.toml"),
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

//! Error types for storysift.
//!
//! This module defines the centralized error type [`StorysiftError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for storysift operations.
///
/// This enum consolidates all error conditions that can occur while running the
/// application, from HTTP failures to storage and configuration issues. Variants
/// that wrap underlying errors from external crates use `#[from]` for automatic
/// conversion.
///
/// The result-set state machine does not distinguish failure causes: every
/// fetch-path error collapses into its single error flag. The variants here exist
/// for logging and startup diagnostics, not for recovery branching.
#[derive(Debug, Error)]
pub enum StorysiftError {
    /// HTTP request failed.
    ///
    /// Covers connect errors, non-2xx statuses (via `error_for_status`), and
    /// response body decode failures alike.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage operation failed.
    ///
    /// Occurs when reading from or writing to the key-value store fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the config file cannot be parsed or contains malformed values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background fetch worker failed.
    ///
    /// Occurs when the worker thread cannot be started or a channel endpoint
    /// has disconnected.
    #[error("Worker communication error: {0}")]
    Worker(String),
}

/// A specialized `Result` type for storysift operations.
///
/// This is a type alias for `std::result::Result<T, StorysiftError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, StorysiftError>;

//! Storage backend abstraction.
//!
//! This module defines the [`KvStore`] trait that abstracts over persistence
//! backends for small named string values. The application stores exactly one
//! value this way (the search term), so the trait is deliberately minimal: get
//! and set of a string by key, nothing resembling an ORM.

use crate::domain::error::Result;

/// Abstraction over a persistent string key-value store.
///
/// # Implementations
///
/// - [`JsonStore`](crate::storage::JsonStore): a single JSON file with atomic
///   writes (default)
pub trait KvStore: Send {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// The write is synchronous: when this returns `Ok`, the value is durable.
    ///
    /// # Errors
    ///
    /// Returns an error if the write operation fails.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

//! Persistent value cell.
//!
//! A [`PersistedCell`] wraps a single named string value with load-on-init and
//! write-on-change semantics against a [`KvStore`]. The cell itself is a plain
//! data holder; the one side effect, writing through to the store, happens
//! synchronously inside [`set`](PersistedCell::set), with no debouncing.

use crate::domain::error::Result;
use crate::storage::backend::KvStore;

/// A single named value kept in sync with a key-value store.
///
/// On construction the cell reads its key from the store, falling back to a
/// caller-supplied default when the key is absent. Every subsequent change is
/// written back under the same key before `set` returns.
pub struct PersistedCell<S: KvStore> {
    key: String,
    value: String,
    store: S,
}

impl<S: KvStore> PersistedCell<S> {
    /// Loads the cell from the store, using `default` when the key is absent.
    ///
    /// The default is not written back until the value first changes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store read fails.
    pub fn load(store: S, key: impl Into<String>, default: &str) -> Result<Self> {
        let key = key.into();
        let value = store.get(&key)?.unwrap_or_else(|| default.to_string());

        tracing::debug!(key = %key, value = %value, "persisted cell loaded");

        Ok(Self { key, value, store })
    }

    /// The currently held value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Updates the value, writing it through to the store when it changed.
    ///
    /// Setting the current value again is a no-op and performs no write.
    ///
    /// # Errors
    ///
    /// Returns an error if the store write fails; the in-memory value is
    /// updated regardless, so the UI stays consistent with what was typed.
    pub fn set(&mut self, value: &str) -> Result<()> {
        if self.value == value {
            return Ok(());
        }

        self.value = value.to_string();
        self.store.set(&self.key, value)
    }
}

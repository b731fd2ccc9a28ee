//! JSON file-based key-value store.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization. It uses atomic file writes (write-to-temp + rename) to
//! prevent corruption on crashes. The whole dataset is a handful of short
//! strings, so the entire file is kept in memory and rewritten on change.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::{Result, StorysiftError};
use crate::storage::backend::KvStore;

/// JSON storage container format.
///
/// Top-level structure serialized to disk:
///
/// ```json
/// {
///   "version": 1,
///   "entries": { "search_term": "rust" },
///   "updated_at": 1234567890
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored values by key.
    #[serde(default)]
    entries: HashMap<String, String>,

    /// Unix timestamp of the last write.
    #[serde(default)]
    updated_at: i64,
}

impl Default for StoreData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: HashMap::new(),
            updated_at: 0,
        }
    }
}

/// JSON file storage backend.
///
/// `Send` but not `Sync`; designed to be owned by the single runtime thread
/// that executes persistence actions.
pub struct JsonStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: StoreData,

    /// Tracks whether data has been modified since the last save.
    dirty: bool,
}

impl JsonStore {
    /// Creates or opens a JSON store.
    ///
    /// If the file exists, loads existing data; otherwise starts empty. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            StoreData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    fn load_from_file(path: &PathBuf) -> Result<StoreData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StoreData = serde_json::from_str(&contents)
            .map_err(|e| StorysiftError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(version = data.version, entries = data.entries.len(), "loaded store data");

        Ok(data)
    }

    /// Saves store data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left in a corrupt state.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        self.data.updated_at = chrono::Utc::now().timestamp();

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| StorysiftError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KvStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let previous = self.data.entries.insert(key.to_string(), value.to_string());

        if previous.as_deref() == Some(value) {
            return Ok(());
        }

        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonStore {
    /// Flushes pending changes on drop as a safety net.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save store on drop");
            }
        }
    }
}

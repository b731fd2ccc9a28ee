//! Storage layer for the persisted search term.
//!
//! This module provides the key-value persistence used by the persistent value
//! cell: a minimal store trait, a JSON file implementation with atomic writes,
//! and the cell that keeps one named value in sync with the store.
//!
//! # Modules
//!
//! - `backend`: Store trait abstraction
//! - `json`: JSON file-based store implementation
//! - `cell`: Single-value write-through wrapper

pub mod backend;
pub mod cell;
pub mod json;

pub use backend::KvStore;
pub use cell::PersistedCell;
pub use json::JsonStore;

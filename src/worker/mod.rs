//! Background worker thread for asynchronous HTTP fetches.
//!
//! This module implements the worker that performs all search API requests off
//! the UI thread, communicating over `std::sync::mpsc` channels in both
//! directions.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with sequence numbers
//! - `handler`: Worker loop and the fetch implementation

pub mod handler;
pub mod messages;

pub use handler::{fetch, SearchWorker};
pub use messages::{FetchOutcome, FetchRequest, FetchResponse};

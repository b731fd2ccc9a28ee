//! Fetch worker message types for cross-thread communication.
//!
//! This module defines the request and response protocol between the main UI
//! thread and the background worker thread that performs HTTP fetches. Every
//! message carries the sequence number the request was issued with, which is
//! what lets the handler discard responses that were superseded by a newer
//! query before they arrived.

use crate::domain::Story;

/// A fetch order sent from the UI thread to the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonically increasing issue number; echoed back in the response.
    pub request_id: u64,

    /// Fully constructed query URL to GET.
    pub url: String,
}

/// Terminal outcome of one fetch attempt.
///
/// The failure message exists for logging only; the state machine collapses
/// every failure into a single error flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request succeeded and the body decoded; full replacement hit list.
    Hits(Vec<Story>),

    /// Network error, non-2xx status, or body decode failure.
    Failed(String),
}

/// A completed fetch reported back to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// Issue number copied from the originating [`FetchRequest`].
    pub request_id: u64,

    /// What happened.
    pub outcome: FetchOutcome,
}

//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, imperative commands produced by the
//! event handler after processing user input or worker responses. Actions are
//! the boundary between pure state transformations and effectful operations:
//! the handler decides, the terminal runtime in `main.rs` executes.

use crate::worker::FetchRequest;

/// Commands representing side effects to be executed by the runtime.
///
/// The event handler returns a `Vec<Action>` after processing each event so
/// multiple side effects can be queued atomically; the runtime executes them in
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Posts a fetch order to the background worker thread.
    PostToWorker(FetchRequest),

    /// Writes the current search term through the persistent value cell.
    ///
    /// Emitted on every keystroke-driven change of the term, keeping the
    /// stored value in lockstep with the input box.
    PersistTerm(String),

    /// Leaves the event loop and restores the terminal.
    Quit,
}

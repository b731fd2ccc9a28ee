//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal runtime (main.rs) and the domain/storage/worker layers. It
//! implements the event-driven architecture that powers the interactive UI.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`history`]: Recent-search derivation from issued query URLs
//! - [`modes`]: Input mode state
//! - [`results`]: Result-set state machine (the fetch reducer)
//! - [`sort`]: Sort selection and derived table ordering
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod history;
pub mod modes;
pub mod results;
pub mod sort;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use results::{reduce, ResultSet, ResultsAction};
pub use sort::{sorted_view, SortKey, SortState};
pub use state::AppState;

//! Domain layer for storysift.
//!
//! This module contains the core domain types and pure functions of the
//! application, independent of terminal, HTTP, or storage concerns: the story
//! model as delivered by the search API, query URL construction, and the crate's
//! error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`story`]: Story model and search response envelope
//! - [`query`]: Query URL template and its inverse

pub mod error;
pub mod query;
pub mod story;

pub use error::{Result, StorysiftError};
pub use query::{build_query_url, extract_term};
pub use story::{SearchResponse, Story};

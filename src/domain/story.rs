//! Story domain model and the search response envelope.
//!
//! This module defines the core `Story` type representing one article returned by
//! the Hacker News Algolia search API, plus the [`SearchResponse`] envelope that
//! carries a page of hits. Stories are immutable once received; a successful fetch
//! replaces the whole list, and local removal is the only other mutation.

use serde::{Deserialize, Serialize};

/// One article as returned by the search API.
///
/// The identity key is [`object_id`](Self::object_id); two hits with the same
/// `object_id` refer to the same article. The wire format uses Algolia's field
/// names (`objectID`, `num_comments`), mapped here to Rust naming.
///
/// The live API occasionally omits `url` (Ask HN posts) and the numeric fields on
/// degenerate hits, so those deserialize leniently with defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique article identifier assigned by the API. Identity key for removal.
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// Link target of the story, absent for self posts.
    #[serde(default)]
    pub url: Option<String>,

    /// Story headline.
    #[serde(default)]
    pub title: String,

    /// Account name of the submitter.
    #[serde(default)]
    pub author: String,

    /// Comment count at fetch time.
    #[serde(default)]
    pub num_comments: u32,

    /// Upvote score at fetch time.
    #[serde(default)]
    pub points: u32,
}

/// The portion of the search API response body that the application reads.
///
/// The API returns paging metadata alongside `hits`; everything except the hit
/// collection is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Ranked result collection for the query.
    pub hits: Vec<Story>,
}

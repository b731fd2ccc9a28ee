//! Result-set state machine.
//!
//! This module holds the canonical fetched-story state and the pure reducer that
//! is the only way to change it. The state carries the story list plus a loading
//! and an error flag; four action kinds drive every transition. The reducer takes
//! the current state and an action and returns the next state, with no hidden
//! shared state, so the transition table is trivially unit-testable.
//!
//! # Transition table
//!
//! | Action           | Effect                                                    |
//! |------------------|-----------------------------------------------------------|
//! | `FetchStarted`   | `is_loading = true`, `is_error = false`, stories unchanged |
//! | `FetchSucceeded` | `is_loading = false`, `is_error = false`, stories replaced |
//! | `FetchFailed`    | `is_loading = false`, `is_error = true`, stories unchanged |
//! | `RemoveStory`    | every story with the given identity key dropped            |
//!
//! No transition is terminal; the machine is revisited on every query change.
//! The action enum is exhaustive, so an unrecognized action kind cannot be
//! constructed.

use crate::domain::Story;

/// Canonical fetched-result state.
///
/// `stories` is only ever replaced wholesale by a successful fetch or shrunk by
/// removal; `is_loading` and `is_error` are never both set after a terminal
/// transition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    /// Stories from the most recent successful fetch, minus local removals.
    pub stories: Vec<Story>,

    /// A request has been issued and its response has not arrived yet.
    pub is_loading: bool,

    /// The most recent fetch attempt failed.
    pub is_error: bool,
}

/// The four actions the result-set reducer understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsAction {
    /// A request is about to be issued.
    FetchStarted,

    /// A response arrived with a full replacement story list.
    FetchSucceeded(Vec<Story>),

    /// The request failed; prior stories stay on screen.
    FetchFailed,

    /// Drop every story whose identity key equals the given `objectID`.
    ///
    /// Removing an id that is not present is a no-op, not an error.
    RemoveStory(String),
}

/// Applies one action to the result-set state and returns the next state.
///
/// Pure: neither argument is mutated and no side effects occur. Removal keeps
/// the relative order of all surviving stories.
#[must_use]
pub fn reduce(state: &ResultSet, action: &ResultsAction) -> ResultSet {
    match action {
        ResultsAction::FetchStarted => ResultSet {
            stories: state.stories.clone(),
            is_loading: true,
            is_error: false,
        },
        ResultsAction::FetchSucceeded(stories) => ResultSet {
            stories: stories.clone(),
            is_loading: false,
            is_error: false,
        },
        ResultsAction::FetchFailed => ResultSet {
            stories: state.stories.clone(),
            is_loading: false,
            is_error: true,
        },
        ResultsAction::RemoveStory(object_id) => ResultSet {
            stories: state
                .stories
                .iter()
                .filter(|story| &story.object_id != object_id)
                .cloned()
                .collect(),
            is_loading: state.is_loading,
            is_error: state.is_error,
        },
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input and
//! worker responses, translating them into state changes and action sequences.
//! It is the primary control flow coordinator for the application.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal runtime or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods and the result reducer
//! 4. Actions are collected and returned for execution
//!
//! The fetch orchestration lives here: submitting a search applies the loading
//! transition and emits a worker order in one step, and completed fetches are
//! checked against the current request sequence number so that a response
//! superseded by a newer query is discarded instead of applied.

use crate::app::modes::InputMode;
use crate::app::results::ResultsAction;
use crate::app::sort::SortKey;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::worker::{FetchOutcome, FetchResponse};

/// Events triggered by user input or worker responses.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes these sequentially, ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the table cursor down by one row (wraps to top).
    MoveDown,
    /// Moves the table cursor up by one row (wraps to bottom).
    MoveUp,
    /// Appends a character to the search term (editing mode only).
    Char(char),
    /// Removes the last character from the search term (editing mode only).
    Backspace,
    /// Promotes the typed term into the active query and starts a fetch.
    SubmitSearch,
    /// Removes the story under the cursor from the local result list.
    RemoveSelected,
    /// Selects a sort column; reselecting the active column flips direction.
    Sort(SortKey),
    /// Re-issues the recent search at the given index (0-based, oldest first).
    SelectHistory(usize),
    /// Moves focus to the search input.
    FocusSearch,
    /// Moves focus back to the results without submitting.
    ExitSearch,
    /// Requests application shutdown.
    Quit,
    /// A fetch finished; carries the worker's response.
    FetchCompleted(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to run.
///
/// Returns a `(should_render, actions)` pair: the flag tells the runtime
/// whether the screen needs redrawing, the actions are side effects to execute
/// in order.
///
/// # Errors
///
/// Returns an error if a search submission cannot construct a query URL from
/// the configured endpoint.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::MoveDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::MoveUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }

            state.search_input.push(*c);
            tracing::trace!(term = %state.search_input, "search term edited");

            Ok((true, vec![Action::PersistTerm(state.search_input.clone())]))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Editing {
                return Ok((false, vec![]));
            }

            state.search_input.pop();

            Ok((true, vec![Action::PersistTerm(state.search_input.clone())]))
        }
        Event::SubmitSearch => {
            let term = state.search_input.clone();
            let request = state.submit_term(&term)?;
            state.input_mode = InputMode::Results;

            Ok((true, vec![Action::PostToWorker(request)]))
        }
        Event::RemoveSelected => {
            let Some(story) = state.selected_story() else {
                tracing::debug!("no story selected to remove");
                return Ok((false, vec![]));
            };

            tracing::debug!(object_id = %story.object_id, title = %story.title, "story removed");
            state.apply_results(&ResultsAction::RemoveStory(story.object_id));

            Ok((true, vec![]))
        }
        Event::Sort(key) => {
            state.sort.select(*key);
            Ok((true, vec![]))
        }
        Event::SelectHistory(index) => {
            let terms = state.recent_searches();
            let Some(term) = terms.get(*index).cloned() else {
                tracing::debug!(index = *index, "no recent search at index");
                return Ok((false, vec![]));
            };

            state.search_input = term.clone();
            let request = state.submit_term(&term)?;
            state.input_mode = InputMode::Results;

            Ok((
                true,
                vec![Action::PersistTerm(term), Action::PostToWorker(request)],
            ))
        }
        Event::FocusSearch => {
            state.input_mode = InputMode::Editing;
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Results;
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::FetchCompleted(response) => {
            if response.request_id != state.last_request_id {
                tracing::debug!(
                    response_id = response.request_id,
                    latest_id = state.last_request_id,
                    "discarding stale fetch response"
                );
                return Ok((false, vec![]));
            }

            match &response.outcome {
                FetchOutcome::Hits(stories) => {
                    tracing::debug!(hit_count = stories.len(), "fetch response applied");
                    state.apply_results(&ResultsAction::FetchSucceeded(stories.clone()));
                }
                FetchOutcome::Failed(message) => {
                    tracing::debug!(error = %message, "fetch response reported failure");
                    state.apply_results(&ResultsAction::FetchFailed);
                }
            }

            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::Story;
    use crate::ui::theme::Theme;

    const ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

    fn new_state() -> AppState {
        AppState::new(ENDPOINT.to_string(), Theme::default())
    }

    fn story(id: &str, title: &str) -> Story {
        Story {
            object_id: id.to_string(),
            url: None,
            title: title.to_string(),
            author: "x".to_string(),
            num_comments: 1,
            points: 1,
        }
    }

    fn respond(state: &mut AppState, request_id: u64, outcome: FetchOutcome) -> (bool, Vec<Action>) {
        handle_event(
            state,
            &Event::FetchCompleted(FetchResponse {
                request_id,
                outcome,
            }),
        )
        .unwrap()
    }

    #[test]
    fn submit_then_success_shows_the_hits() {
        let mut state = new_state();
        state.search_input = "React".to_string();

        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();
        let Action::PostToWorker(request) = &actions[0] else {
            panic!("expected a worker order, got {actions:?}");
        };
        assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=React");
        assert!(state.results.is_loading);

        respond(
            &mut state,
            request.request_id,
            FetchOutcome::Hits(vec![story("1", "A")]),
        );

        assert!(!state.results.is_loading);
        assert!(!state.results.is_error);
        assert_eq!(state.results.stories, vec![story("1", "A")]);
    }

    #[test]
    fn removing_the_only_story_empties_the_list() {
        let mut state = new_state();
        state.input_mode = InputMode::Results;
        state.results.stories = vec![story("1", "A")];

        let (rendered, actions) = handle_event(&mut state, &Event::RemoveSelected).unwrap();

        assert!(rendered);
        assert!(actions.is_empty());
        assert!(state.results.stories.is_empty());
        assert!(!state.results.is_loading);
        assert!(!state.results.is_error);
    }

    #[test]
    fn failure_sets_the_error_flag_and_keeps_data() {
        let mut state = new_state();
        state.results.stories = vec![story("1", "A")];
        state.search_input = "rust".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();

        respond(&mut state, 1, FetchOutcome::Failed("boom".to_string()));

        assert!(state.results.is_error);
        assert!(!state.results.is_loading);
        assert_eq!(state.results.stories, vec![story("1", "A")]);
    }

    #[test]
    fn a_second_submit_extends_the_history() {
        let mut state = new_state();
        state.search_input = "React".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        state.search_input = "Redux".to_string();
        let (_, actions) = handle_event(&mut state, &Event::SubmitSearch).unwrap();

        let Action::PostToWorker(request) = &actions[0] else {
            panic!("expected a worker order");
        };
        assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=Redux");
        assert_eq!(state.recent_searches(), vec!["React", "Redux"]);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut state = new_state();
        state.search_input = "React".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        state.search_input = "Redux".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();

        // The response to the superseded first request arrives late.
        let (rendered, _) = respond(&mut state, 1, FetchOutcome::Hits(vec![story("1", "old")]));

        assert!(!rendered);
        assert!(state.results.stories.is_empty());
        assert!(state.results.is_loading);

        respond(&mut state, 2, FetchOutcome::Hits(vec![story("2", "new")]));
        assert_eq!(state.results.stories, vec![story("2", "new")]);
    }

    #[test]
    fn typing_persists_every_change() {
        let mut state = new_state();

        let (_, actions) = handle_event(&mut state, &Event::Char('r')).unwrap();
        assert_eq!(actions, vec![Action::PersistTerm("r".to_string())]);

        let (_, actions) = handle_event(&mut state, &Event::Char('u')).unwrap();
        assert_eq!(actions, vec![Action::PersistTerm("ru".to_string())]);

        let (_, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(actions, vec![Action::PersistTerm("r".to_string())]);
    }

    #[test]
    fn typing_is_ignored_outside_editing_mode() {
        let mut state = new_state();
        state.input_mode = InputMode::Results;

        let (rendered, actions) = handle_event(&mut state, &Event::Char('r')).unwrap();

        assert!(!rendered);
        assert!(actions.is_empty());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn selecting_a_recent_search_reissues_it() {
        let mut state = new_state();
        state.search_input = "React".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();
        state.search_input = "Redux".to_string();
        handle_event(&mut state, &Event::SubmitSearch).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::SelectHistory(0)).unwrap();

        assert_eq!(state.search_input, "React");
        assert_eq!(actions[0], Action::PersistTerm("React".to_string()));
        let Action::PostToWorker(request) = &actions[1] else {
            panic!("expected a worker order");
        };
        assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=React");
        assert_eq!(request.request_id, 3);
    }

    #[test]
    fn quit_emits_the_quit_action() {
        let mut state = new_state();

        let (rendered, actions) = handle_event(&mut state, &Event::Quit).unwrap();

        assert!(!rendered);
        assert_eq!(actions, vec![Action::Quit]);
    }
}

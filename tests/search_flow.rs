//! End-to-end search flow through the public API.
//!
//! Drives the application state machine the way the terminal runtime does:
//! events in, actions and state snapshots out. Covers the submit → fetch →
//! render-state cycle, local removal, sorting from the table view, recent
//! search re-issue, and term persistence across a simulated restart.

use storysift::app::{handle_event, Action, AppState, Event, InputMode, SortKey};
use storysift::storage::{JsonStore, KvStore, PersistedCell};
use storysift::worker::{FetchOutcome, FetchRequest, FetchResponse};
use storysift::{initialize, Config, Story};

fn story(id: &str, title: &str, author: &str, comments: u32, points: u32) -> Story {
    Story {
        object_id: id.to_string(),
        url: Some(format!("https://example.org/{id}")),
        title: title.to_string(),
        author: author.to_string(),
        num_comments: comments,
        points,
    }
}

fn submit(state: &mut AppState, term: &str) -> FetchRequest {
    state.search_input = term.to_string();
    let (_, actions) = handle_event(state, &Event::SubmitSearch).unwrap();
    let Action::PostToWorker(request) = actions.into_iter().next().unwrap() else {
        panic!("submit should post a worker order");
    };
    request
}

fn respond(state: &mut AppState, request_id: u64, outcome: FetchOutcome) -> bool {
    let (rendered, _) = handle_event(
        state,
        &Event::FetchCompleted(FetchResponse { request_id, outcome }),
    )
    .unwrap();
    rendered
}

#[test]
fn search_fetch_sort_remove_cycle() {
    let mut state = initialize(&Config::default());

    // Submit and let the fetch succeed.
    let request = submit(&mut state, "React");
    assert_eq!(request.url, "https://hn.algolia.com/api/v1/search?query=React");
    assert!(state.results.is_loading);

    let hits = vec![
        story("1", "beta", "zoe", 5, 10),
        story("2", "alpha", "amy", 9, 30),
        story("3", "gamma", "mia", 1, 20),
    ];
    respond(&mut state, request.request_id, FetchOutcome::Hits(hits));
    assert!(!state.results.is_loading);
    assert_eq!(state.results.stories.len(), 3);

    // Sort by points: descending, so "2" (30 points) leads the view.
    handle_event(&mut state, &Event::Sort(SortKey::Points)).unwrap();
    let view = state.sorted_stories();
    assert_eq!(view[0].object_id, "2");

    // A second click on the same column reverses the view (Scenario E).
    handle_event(&mut state, &Event::Sort(SortKey::Points)).unwrap();
    let reversed = state.sorted_stories();
    assert_eq!(reversed[0].object_id, "1");
    assert_eq!(
        reversed.iter().map(|s| &s.object_id).rev().collect::<Vec<_>>(),
        view.iter().map(|s| &s.object_id).collect::<Vec<_>>()
    );

    // Remove the story at the top of the *sorted* view.
    handle_event(&mut state, &Event::RemoveSelected).unwrap();
    assert_eq!(state.results.stories.len(), 2);
    assert!(state.results.stories.iter().all(|s| s.object_id != "1"));
    assert!(!state.results.is_loading);
    assert!(!state.results.is_error);
}

#[test]
fn failed_fetch_keeps_previous_results_visible() {
    let mut state = initialize(&Config::default());

    let request = submit(&mut state, "React");
    respond(
        &mut state,
        request.request_id,
        FetchOutcome::Hits(vec![story("1", "A", "x", 1, 1)]),
    );

    let request = submit(&mut state, "Redux");
    respond(
        &mut state,
        request.request_id,
        FetchOutcome::Failed("connection reset".to_string()),
    );

    assert!(state.results.is_error);
    assert!(!state.results.is_loading);
    assert_eq!(state.results.stories.len(), 1, "prior data must survive a failure");
}

#[test]
fn recent_searches_drive_quick_repeat() {
    let mut state = initialize(&Config::default());

    for term in ["one", "two", "three", "four", "five", "six"] {
        let request = submit(&mut state, term);
        respond(&mut state, request.request_id, FetchOutcome::Hits(vec![]));
    }

    assert_eq!(
        state.recent_searches(),
        vec!["two", "three", "four", "five", "six"]
    );

    // Pressing "1" in the UI re-issues the oldest shown term.
    let (_, actions) = handle_event(&mut state, &Event::SelectHistory(0)).unwrap();
    assert_eq!(state.search_input, "two");
    assert!(actions
        .iter()
        .any(|a| matches!(a, Action::PostToWorker(r) if r.url.ends_with("query=two"))));
    assert!(state.results.is_loading);
}

#[test]
fn late_response_for_a_superseded_query_is_ignored() {
    let mut state = initialize(&Config::default());

    let first = submit(&mut state, "React");
    let second = submit(&mut state, "Redux");

    // The slow first response lands after the second request was issued.
    let rendered = respond(
        &mut state,
        first.request_id,
        FetchOutcome::Hits(vec![story("9", "stale", "x", 0, 0)]),
    );
    assert!(!rendered);
    assert!(state.results.stories.is_empty());
    assert!(state.results.is_loading);

    respond(
        &mut state,
        second.request_id,
        FetchOutcome::Hits(vec![story("1", "fresh", "y", 0, 0)]),
    );
    assert_eq!(state.results.stories[0].title, "fresh");
}

#[test]
fn editing_persists_and_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    let mut state = initialize(&Config::default());
    let store = JsonStore::new(path.clone()).unwrap();
    let mut cell = PersistedCell::load(store, "search_term", "rust").unwrap();
    assert_eq!(cell.value(), "rust");
    state.search_input = cell.value().to_string();
    state.input_mode = InputMode::Editing;

    for c in ['y', 'e', 'w'] {
        let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
        for action in actions {
            if let Action::PersistTerm(term) = action {
                cell.set(&term).unwrap();
            }
        }
    }
    drop(cell);

    // Simulated restart: the cell loads the stored value, not the default.
    let store = JsonStore::new(path).unwrap();
    let cell = PersistedCell::load(store, "search_term", "rust").unwrap();
    assert_eq!(cell.value(), "rustyew");
}

#[test]
fn store_trait_object_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let mut store: Box<dyn KvStore> = Box::new(JsonStore::new(dir.path().join("s.json")).unwrap());

    store.set("search_term", "react").unwrap();
    assert_eq!(store.get("search_term").unwrap().as_deref(), Some("react"));
    assert_eq!(store.get("other").unwrap(), None);
}

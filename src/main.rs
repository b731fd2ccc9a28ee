//! Terminal runtime and entry point.
//!
//! This module provides the thin integration layer between the storysift
//! library and the terminal: raw mode and alternate screen management, the
//! event loop, keyboard mapping, worker thread wiring, and action execution.
//!
//! # Runtime Lifecycle
//!
//! 1. **Startup**: load config, initialize tracing, open the JSON store and
//!    the persisted search term cell, create application state
//! 2. **Worker**: spawn the fetch worker thread connected by two channels
//! 3. **Terminal**: enable raw mode, enter the alternate screen, hide cursor
//! 4. **Initial search**: submit the persisted term so the table fills
//! 5. **Loop**: render when dirty, drain worker responses, poll keys,
//!    dispatch events, execute actions
//! 6. **Shutdown**: restore the terminal, close the request channel, join
//!    the worker
//!
//! # Key Mapping
//!
//! Editing mode (search box focused):
//! - printable characters / Backspace: edit the term
//! - `Enter`: submit, focus results
//! - `Esc`: focus results without submitting
//!
//! Results mode:
//! - `j`/`k`/arrows: navigate (wraps)
//! - `x`/`Delete`: remove the selected story
//! - `t`/`a`/`c`/`p`: sort by title/author/comments/points
//! - `1`-`5`: re-issue a recent search
//! - `/`: focus the search box
//! - `Enter`: resubmit the current term
//! - `q`: quit
//!
//! `Ctrl+C` quits in either mode.

use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, size, EnterAlternateScreen, LeaveAlternateScreen,
};

use storysift::app::{handle_event, Action, AppState, Event, InputMode, SortKey};
use storysift::domain::error::{Result, StorysiftError};
use storysift::infrastructure::paths;
use storysift::storage::{JsonStore, KvStore, PersistedCell};
use storysift::worker::{FetchRequest, FetchResponse, SearchWorker};
use storysift::{observability, ui, Config};

/// Storage key of the persisted search term.
const SEARCH_TERM_KEY: &str = "search_term";

/// How long one event poll waits before the loop checks the worker channel.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let config = Config::load()?;
    observability::init_tracing(&config);

    tracing::debug!(endpoint = %config.endpoint, "starting storysift");

    let store = JsonStore::new(paths::store_file())?;
    let mut term_cell = PersistedCell::load(store, SEARCH_TERM_KEY, &config.default_term)?;

    let mut state = storysift::initialize(&config);
    state.search_input = term_cell.value().to_string();

    let (request_tx, request_rx) = mpsc::channel::<FetchRequest>();
    let (response_tx, response_rx) = mpsc::channel::<FetchResponse>();

    let worker = SearchWorker::new()?;
    let worker_handle = std::thread::Builder::new()
        .name("fetch-worker".to_string())
        .spawn(move || worker.run(&request_rx, &response_tx))?;

    let mut stdout = std::io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let result = run_loop(&mut state, &mut term_cell, &request_tx, &response_rx);

    execute!(stdout, cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    // Closing the request channel ends the worker loop.
    drop(request_tx);
    if worker_handle.join().is_err() {
        tracing::error!("fetch worker panicked");
    }

    tracing::debug!("storysift stopped");
    result
}

/// Runs the event loop until quit.
///
/// Renders only when an event reported a state change, drains all pending
/// worker responses between key polls, and executes handler actions.
fn run_loop<S: KvStore>(
    state: &mut AppState,
    term_cell: &mut PersistedCell<S>,
    request_tx: &Sender<FetchRequest>,
    response_rx: &Receiver<FetchResponse>,
) -> Result<()> {
    let mut should_render = true;

    // Issue the initial search with the persisted term.
    let (_, quit) = dispatch(state, term_cell, request_tx, &Event::SubmitSearch)?;
    debug_assert!(!quit);

    loop {
        if should_render {
            let (cols, rows) = size()?;
            ui::render(state, rows as usize, cols as usize);
            std::io::stdout().flush()?;
            should_render = false;
        }

        while let Ok(response) = response_rx.try_recv() {
            let (rendered, quit) =
                dispatch(state, term_cell, request_tx, &Event::FetchCompleted(response))?;
            should_render |= rendered;
            if quit {
                return Ok(());
            }
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        match event::read()? {
            TermEvent::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let Some(app_event) = map_key_event(state, &key) else {
                    continue;
                };

                let (rendered, quit) = dispatch(state, term_cell, request_tx, &app_event)?;
                should_render |= rendered;
                if quit {
                    return Ok(());
                }
            }
            TermEvent::Resize(..) => {
                should_render = true;
            }
            _ => {}
        }
    }
}

/// Processes one event and executes the resulting actions.
///
/// Returns `(should_render, quit)`.
fn dispatch<S: KvStore>(
    state: &mut AppState,
    term_cell: &mut PersistedCell<S>,
    request_tx: &Sender<FetchRequest>,
    event: &Event,
) -> Result<(bool, bool)> {
    let (should_render, actions) = handle_event(state, event)?;

    let mut quit = false;
    for action in actions {
        match action {
            Action::PostToWorker(request) => {
                request_tx
                    .send(request)
                    .map_err(|e| StorysiftError::Worker(format!("request channel closed: {e}")))?;
            }
            Action::PersistTerm(term) => {
                // The store is assumed available; a failed write is logged,
                // not surfaced.
                if let Err(e) = term_cell.set(&term) {
                    tracing::warn!(error = %e, "failed to persist search term");
                }
            }
            Action::Quit => {
                quit = true;
            }
        }
    }

    Ok((should_render, quit))
}

/// Maps a terminal key event to an application event.
///
/// Returns `None` for keys that have no meaning in the current input mode.
fn map_key_event(state: &AppState, key: &KeyEvent) -> Option<Event> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Event::Quit);
    }

    match state.input_mode {
        InputMode::Editing => match key.code {
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Esc => Some(Event::ExitSearch),
            KeyCode::Backspace => Some(Event::Backspace),
            KeyCode::Char(c) => Some(Event::Char(c)),
            _ => None,
        },
        InputMode::Results => match key.code {
            KeyCode::Down | KeyCode::Char('j') => Some(Event::MoveDown),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::MoveUp),
            KeyCode::Delete | KeyCode::Char('x') => Some(Event::RemoveSelected),
            KeyCode::Char('t') => Some(Event::Sort(SortKey::Title)),
            KeyCode::Char('a') => Some(Event::Sort(SortKey::Author)),
            KeyCode::Char('c') => Some(Event::Sort(SortKey::Comments)),
            KeyCode::Char('p') => Some(Event::Sort(SortKey::Points)),
            KeyCode::Char(c @ '1'..='5') => {
                Some(Event::SelectHistory(c as usize - '1' as usize))
            }
            KeyCode::Char('/') => Some(Event::FocusSearch),
            KeyCode::Enter => Some(Event::SubmitSearch),
            KeyCode::Char('q') => Some(Event::Quit),
            _ => None,
        },
    }
}

//! Storysift: a terminal search client for the Hacker News article API.
//!
//! Storysift is a small full-screen terminal application that provides:
//! - Incremental search against the Hacker News Algolia endpoint
//! - A sortable results table (title, author, comments, points) with
//!   per-row removal
//! - Quick-repeat shortcuts for the last five distinct search terms
//! - A search term that survives restarts via a JSON key-value file
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Runtime (main.rs)                         │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Result-set reducer                               │  ← Event handling
//! │  - Sort controller, search history                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - JSON store  │   │ - HTTP fetch  │
//! │ - Theming     │   │ - Value cell  │   │ - Channels    │
//! │ - Components  │   │ - KV trait    │   │ - Sequencing  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Story model, query URLs, errors (domain/)        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Story, query URLs, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`storage`]: JSON key-value persistence and the persistent value cell
//! - [`worker`]: Background worker for asynchronous HTTP fetches
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Tracing subscriber setup
//!
//! # Control Flow
//!
//! 1. Keystrokes edit the search term; every change is written through the
//!    persistent value cell.
//! 2. Enter promotes the term into the active query URL, records it in the
//!    issued-URL history, and posts a sequenced fetch order to the worker.
//! 3. The worker GETs the URL and reports a [`worker::FetchResponse`].
//! 4. The handler discards stale responses and otherwise drives the
//!    result-set reducer; the renderer draws from the state snapshot using
//!    the sort controller's derived ordering.
//!
//! # Example
//!
//! ```rust
//! use storysift::{initialize, Config};
//!
//! let config = Config::default();
//! let state = initialize(&config);
//!
//! assert!(state.results.stories.is_empty());
//! assert_eq!(state.endpoint, "https://hn.algolia.com/api/v1/search");
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SortKey};
pub use domain::{Result, Story, StorysiftError};
pub use ui::Theme;

use std::path::Path;

use serde::Deserialize;

/// Default search API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

/// Default search term used when nothing has been persisted yet.
pub const DEFAULT_TERM: &str = "rust";

/// Application configuration, loaded from an optional TOML file.
///
/// Every field has a default, so an absent config file is not an error.
///
/// # Example
///
/// ```toml
/// # ~/.config/storysift/config.toml
/// endpoint = "https://hn.algolia.com/api/v1/search"
/// default_term = "rust"
/// theme = "catppuccin-mocha"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search API endpoint base URL.
    pub endpoint: String,

    /// Term pre-filled into the search box when no value has been persisted.
    pub default_term: String,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set.
    #[serde(rename = "theme")]
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for the log file.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    /// `RUST_LOG` overrides this.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_term: DEFAULT_TERM.to_string(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from the platform config file location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed. An
    /// absent file yields the default configuration.
    pub fn load() -> Result<Self> {
        Self::from_file(&infrastructure::paths::config_file())
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| StorysiftError::Config(format!("failed to parse {}: {e}", path.display())))
    }
}

/// Initializes application state from configuration.
///
/// Resolves the theme (custom file first, then built-in name, then default)
/// and creates an [`AppState`] with an empty result set pointed at the
/// configured endpoint. The persisted search term is loaded separately by the
/// runtime, which owns the storage handle.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing storysift");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config.endpoint.clone(), theme)
}

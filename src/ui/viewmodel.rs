//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state.
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer; they contain no business logic, only display-ready data such
//! as pre-truncated titles, highlight ranges, and formatted header cells.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows to display in the results table, already windowed and ordered.
    pub display_rows: Vec<DisplayRow>,

    /// Index of the selected row within `display_rows`.
    pub selected_index: usize,

    /// Header information (title bar text).
    pub header: HeaderInfo,

    /// Table column headers, with the sort indicator baked into the active one.
    pub table_header: TableHeaderInfo,

    /// Search box state.
    pub search_bar: SearchBarInfo,

    /// Recent-search shortcut row, absent until a search has been issued.
    pub history: Option<HistoryInfo>,

    /// Loading or error banner, absent when idle.
    pub status: Option<StatusLine>,

    /// Empty-table message, absent while rows, a spinner, or an error show.
    pub empty_state: Option<EmptyState>,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,
}

/// Display information for a single story row.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    /// Title, truncated to the title column width.
    pub title: String,

    /// Submitter account name.
    pub author: String,

    /// Comment count.
    pub num_comments: u32,

    /// Upvote score.
    pub points: u32,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges within `title` matching the active search term.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Table column header labels.
///
/// The active sort column carries a direction indicator appended to its label.
#[derive(Debug, Clone)]
pub struct TableHeaderInfo {
    /// Labels in display order: title, author, comments, points.
    pub columns: [String; 4],
}

/// Search box display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search term as typed.
    pub query: String,

    /// Whether the box has input focus (editing mode).
    pub is_focused: bool,
}

/// Recent-search shortcut row.
#[derive(Debug, Clone)]
pub struct HistoryInfo {
    /// Most-recent-last distinct terms, at most five.
    pub terms: Vec<String>,
}

/// Fetch status banner shown between the search box and the table.
#[derive(Debug, Clone)]
pub struct StatusLine {
    /// Banner text.
    pub message: String,

    /// Severity, which selects the accent color.
    pub kind: StatusKind,
}

/// Severity of a [`StatusLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// A request is in flight.
    Loading,

    /// The most recent request failed.
    Error,
}

/// Empty state message display information.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

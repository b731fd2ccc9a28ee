//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with selection management, search submission, and UI view
//! model generation. It is the single source of truth for all transient UI
//! state.
//!
//! # State Components
//!
//! - **Results**: the canonical fetched-story state, mutated only through the
//!   result-set reducer
//! - **Search input**: the term as currently typed
//! - **Issued URLs**: every query URL submitted so far; the last one is active
//!   and the sequence feeds the recent-search derivation
//! - **Sort**: the active column selection, a derived view concern only
//! - **Selection**: cursor position within the sorted table view
//! - **Request sequence**: the latest issued fetch id, used to discard stale
//!   responses
//!
//! View models are computed on demand from state snapshots; nothing in this
//! module performs I/O.

use crate::app::history::recent_terms;
use crate::app::modes::InputMode;
use crate::app::results::{reduce, ResultSet, ResultsAction};
use crate::app::sort::{sorted_view, SortKey, SortState};
use crate::domain::error::Result;
use crate::domain::query::{build_query_url, extract_term};
use crate::domain::Story;
use crate::ui::components::table::title_column_width;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DisplayRow, EmptyState, FooterInfo, HeaderInfo, HistoryInfo, SearchBarInfo, StatusKind,
    StatusLine, TableHeaderInfo, UIViewModel,
};
use crate::worker::FetchRequest;

/// Rows of fixed chrome around the table: blank line, header, top border,
/// search box (3), history row, status row, column headers, bottom border,
/// footer, and the final terminal row the footer sits above.
const CHROME_ROWS: usize = 12;

/// Central application state container.
///
/// Mutated by the event handler in response to user input and worker
/// responses. The fetched-result substate only changes through
/// [`apply_results`](Self::apply_results), which routes everything through the
/// pure reducer.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonical fetched-story state (list + loading/error flags).
    pub results: ResultSet,

    /// Search term as currently typed in the input box.
    pub search_input: String,

    /// Every query URL issued this session, oldest first.
    ///
    /// The last element is the active query URL. Feeds the recent-search
    /// shortcut derivation.
    pub issued_urls: Vec<String>,

    /// Active sort selection for the derived table view.
    pub sort: SortState,

    /// Zero-based cursor position within the sorted view.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Sequence number of the most recently issued fetch request.
    ///
    /// Responses carrying any other id are stale and get discarded.
    pub last_request_id: u64,

    /// Search API endpoint base, from configuration.
    pub endpoint: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates a fresh application state with no results and an empty history.
    #[must_use]
    pub fn new(endpoint: String, theme: Theme) -> Self {
        Self {
            results: ResultSet::default(),
            search_input: String::new(),
            issued_urls: Vec::new(),
            sort: SortState::default(),
            selected_index: 0,
            input_mode: InputMode::Editing,
            last_request_id: 0,
            endpoint,
            theme,
        }
    }

    /// Promotes a term into the active query URL and starts a fetch.
    ///
    /// Appends the constructed URL to the issued sequence, bumps the request
    /// sequence number, and applies the loading transition. Returns the fetch
    /// order for the worker; the caller posts it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint is not a valid URL.
    pub fn submit_term(&mut self, term: &str) -> Result<FetchRequest> {
        let url = build_query_url(&self.endpoint, term)?;

        tracing::debug!(term = %term, url = %url, "search submitted");

        self.issued_urls.push(url.clone());
        self.last_request_id += 1;
        self.apply_results(&ResultsAction::FetchStarted);

        Ok(FetchRequest {
            request_id: self.last_request_id,
            url,
        })
    }

    /// Routes an action through the result-set reducer and re-clamps selection.
    pub fn apply_results(&mut self, action: &ResultsAction) {
        self.results = reduce(&self.results, action);
        self.clamp_selection();
    }

    /// The term of the active query URL, if any search has been issued.
    #[must_use]
    pub fn active_term(&self) -> Option<String> {
        self.issued_urls.last().and_then(|url| extract_term(url))
    }

    /// Distinct recent search terms, most-recent-last, at most five.
    #[must_use]
    pub fn recent_searches(&self) -> Vec<String> {
        recent_terms(&self.issued_urls)
    }

    /// The display ordering of the current stories under the active sort.
    #[must_use]
    pub fn sorted_stories(&self) -> Vec<Story> {
        sorted_view(&self.results.stories, self.sort)
    }

    /// The story under the cursor, if the table is non-empty.
    #[must_use]
    pub fn selected_story(&self) -> Option<Story> {
        self.sorted_stories().into_iter().nth(self.selected_index)
    }

    /// Moves the cursor down by one row, wrapping to the top at the end.
    pub fn move_selection_down(&mut self) {
        if self.results.stories.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.stories.len();
    }

    /// Moves the cursor up by one row, wrapping to the bottom at the start.
    pub fn move_selection_up(&mut self) {
        if self.results.stories.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.stories.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    fn clamp_selection(&mut self) {
        if self.results.stories.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.stories.len() - 1);
        }
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// Windows the sorted view around the cursor so the selected row stays
    /// visible, truncates titles to the title column, and pre-computes search
    /// term highlight ranges.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let sorted = self.sorted_stories();
        let available_rows = Self::calculate_available_rows(rows);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(sorted.len());

        let actual_count = visible_end.saturating_sub(visible_start);
        if actual_count < available_rows && sorted.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let term = self.active_term().unwrap_or_default();
        let title_width = title_column_width(cols);

        let display_rows: Vec<DisplayRow> = sorted[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, story)| {
                let absolute_idx = visible_start + relative_idx;
                Self::compute_display_row(
                    story,
                    absolute_idx == self.selected_index,
                    title_width,
                    &term,
                )
            })
            .collect();

        let selected_display_index = self.selected_index.saturating_sub(visible_start);

        UIViewModel {
            display_rows,
            selected_index: selected_display_index,
            header: self.compute_header(),
            table_header: self.compute_table_header(),
            search_bar: SearchBarInfo {
                query: self.search_input.clone(),
                is_focused: self.input_mode == InputMode::Editing,
            },
            history: self.compute_history(),
            status: self.compute_status(),
            empty_state: self.compute_empty_state(),
            footer: self.compute_footer(),
        }
    }

    /// Builds one table row: truncated title, term highlights, selection mark.
    fn compute_display_row(
        story: &Story,
        is_selected: bool,
        title_width: usize,
        term: &str,
    ) -> DisplayRow {
        let title = truncate_chars(&story.title, title_width);

        let highlight_ranges = if term.is_empty() {
            vec![]
        } else {
            find_term_ranges(&title, term)
        };

        DisplayRow {
            title,
            author: story.author.clone(),
            num_comments: story.num_comments,
            points: story.points,
            is_selected,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let count = self.results.stories.len();
        HeaderInfo {
            title: format!(" Storysift ({count} stories) "),
        }
    }

    fn compute_table_header(&self) -> TableHeaderInfo {
        let columns = [
            (SortKey::Title, "TITLE"),
            (SortKey::Author, "AUTHOR"),
            (SortKey::Comments, "COMMENTS"),
            (SortKey::Points, "POINTS"),
        ]
        .map(|(key, label)| {
            if self.sort.key == key {
                // Comments and points order descending by default.
                let descending = matches!(key, SortKey::Comments | SortKey::Points)
                    != self.sort.is_reverse;
                let marker = if descending { "▼" } else { "▲" };
                format!("{label} {marker}")
            } else {
                label.to_string()
            }
        });

        TableHeaderInfo { columns }
    }

    fn compute_history(&self) -> Option<HistoryInfo> {
        let terms = self.recent_searches();
        if terms.is_empty() {
            None
        } else {
            Some(HistoryInfo { terms })
        }
    }

    fn compute_status(&self) -> Option<StatusLine> {
        if self.results.is_loading {
            Some(StatusLine {
                message: "Loading stories…".to_string(),
                kind: StatusKind::Loading,
            })
        } else if self.results.is_error {
            Some(StatusLine {
                message: "Something went wrong while fetching. Press Enter to retry.".to_string(),
                kind: StatusKind::Error,
            })
        } else {
            None
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if self.results.stories.is_empty() && !self.results.is_loading && !self.results.is_error {
            Some(EmptyState {
                message: "No stories to show".to_string(),
                subtitle: "Press / and type to search".to_string(),
            })
        } else {
            None
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Editing => {
                "Type to edit  Enter: search  Esc: back to results".to_string()
            }
            InputMode::Results => {
                "j/k: navigate  t/a/c/p: sort  x: remove  1-5: recent  /: edit  q: quit"
                    .to_string()
            }
        };

        FooterInfo { keybindings }
    }

    const fn calculate_available_rows(total_rows: usize) -> usize {
        total_rows.saturating_sub(CHROME_ROWS)
    }
}

/// Truncates a string to at most `max` characters, marking the cut with `...`.
fn truncate_chars(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }

    let keep = max.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Finds non-overlapping occurrences of `term` in `text`, ASCII case-insensitive.
///
/// Returns `(start, end)` character index ranges, end exclusive, for the
/// highlight renderer.
fn find_term_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let text_chars: Vec<char> = text.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();

    if term_chars.is_empty() || term_chars.len() > text_chars.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;

    while i + term_chars.len() <= text_chars.len() {
        let window = &text_chars[i..i + term_chars.len()];
        let matches = window
            .iter()
            .zip(term_chars.iter())
            .all(|(a, b)| a.eq_ignore_ascii_case(b));

        if matches {
            ranges.push((i, i + term_chars.len()));
            i += term_chars.len();
        } else {
            i += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

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

    fn state_with(stories: Vec<Story>) -> AppState {
        let mut state = AppState::new(ENDPOINT.to_string(), Theme::default());
        state.results.stories = stories;
        state
    }

    #[test]
    fn submit_bumps_sequence_and_records_url() {
        let mut state = state_with(vec![]);

        let first = state.submit_term("React").unwrap();
        let second = state.submit_term("Redux").unwrap();

        assert_eq!(first.request_id, 1);
        assert_eq!(second.request_id, 2);
        assert_eq!(state.last_request_id, 2);
        assert_eq!(
            state.issued_urls,
            vec![
                "https://hn.algolia.com/api/v1/search?query=React",
                "https://hn.algolia.com/api/v1/search?query=Redux",
            ]
        );
        assert!(state.results.is_loading);
        assert_eq!(state.active_term().as_deref(), Some("Redux"));
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state_with(vec![story("1", "A"), story("2", "B")]);

        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        state.move_selection_up();
        assert_eq!(state.selected_index, 1);
    }

    #[test]
    fn removal_clamps_selection() {
        let mut state = state_with(vec![story("1", "A"), story("2", "B")]);
        state.selected_index = 1;

        state.apply_results(&ResultsAction::RemoveStory("2".to_string()));

        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selected_story_follows_sort_order() {
        let mut state = state_with(vec![story("1", "beta"), story("2", "alpha")]);
        state.sort.select(SortKey::Title);
        state.selected_index = 0;

        assert_eq!(state.selected_story().unwrap().object_id, "2");
    }

    #[test]
    fn table_header_marks_the_active_column() {
        let mut state = state_with(vec![]);
        state.sort.select(SortKey::Points);

        let header = state.compute_table_header();
        assert_eq!(header.columns[3], "POINTS ▼");

        state.sort.select(SortKey::Points);
        let header = state.compute_table_header();
        assert_eq!(header.columns[3], "POINTS ▲");
        assert_eq!(header.columns[0], "TITLE");
    }

    #[test]
    fn viewmodel_reflects_loading_then_error() {
        let mut state = state_with(vec![]);
        state.submit_term("rust").unwrap();

        let vm = state.compute_viewmodel(30, 100);
        assert!(matches!(vm.status, Some(StatusLine { kind: StatusKind::Loading, .. })));
        assert!(vm.empty_state.is_none());

        state.apply_results(&ResultsAction::FetchFailed);
        let vm = state.compute_viewmodel(30, 100);
        assert!(matches!(vm.status, Some(StatusLine { kind: StatusKind::Error, .. })));
    }

    #[test]
    fn highlight_ranges_cover_term_occurrences() {
        let ranges = find_term_ranges("Rust in rustc", "rust");
        assert_eq!(ranges, vec![(0, 4), (8, 12)]);

        assert!(find_term_ranges("nothing here", "rust").is_empty());
        assert!(find_term_ranges("short", "much longer term").is_empty());
    }

    #[test]
    fn truncation_is_character_safe() {
        assert_eq!(truncate_chars("héllo wörld", 20), "héllo wörld");
        assert_eq!(truncate_chars("abcdefghij", 8), "abcde...");
        assert_eq!(truncate_chars("éééééééééé", 8), "ééééé...");
    }
}

//! Input mode state for the application.
//!
//! The application operates in one of two input modes that determine how
//! keystrokes are interpreted and which footer hints are displayed:
//!
//! - **Editing**: the search box has focus and printable keys edit the term
//! - **Results**: the table has focus and keys navigate, sort, and remove

/// Current input handling mode.
///
/// Controls which keybindings are active and where typed characters go.
/// Determines the displayed footer text and the search box focus marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// The search input has focus.
    ///
    /// Printable characters append to the term, Backspace deletes, Enter
    /// submits the search and moves focus to the results, Esc moves focus
    /// without submitting.
    #[default]
    Editing,

    /// The results table has focus.
    ///
    /// `j`/`k` and the arrow keys navigate, `x`/Delete removes the selected
    /// row, `t`/`a`/`c`/`p` pick a sort column, `1`-`5` re-issue a recent
    /// search, `/` returns to the search input, `q` quits.
    Results,
}

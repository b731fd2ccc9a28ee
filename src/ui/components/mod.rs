//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the different
//! parts of the interface, plus the screen layout function that stacks them.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`search`]: Search input box
//! - [`history`]: Recent-search shortcut row
//! - [`status`]: Loading/error banner
//! - [`table`]: Results table with sortable columns
//! - [`empty`]: Empty-table message
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Box - 3 lines]
//! [Recent-search row]            (blank when no search was issued)
//! [Status banner]                (blank when idle)
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod history;
mod search;
mod status;
pub mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use history::render_history_row;
use search::render_search_bar;
use status::render_status;
use table::{render_table_header, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// Returns the next available row position.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one full frame from the view model.
///
/// The screen is expected to be cleared beforehand; optional rows (history,
/// status) keep their slot in the layout so the table does not jump around as
/// banners come and go.
pub fn render_screen(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(history) = &vm.history {
        render_history_row(current_row, history, theme, cols);
    }
    current_row += 1;

    if let Some(status) = &vm.status {
        render_status(current_row, status, theme, cols);
    }
    current_row += 1;

    current_row = render_table_header(current_row, &vm.table_header, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_rows, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

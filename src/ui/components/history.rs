//! Recent-search shortcut row renderer.
//!
//! Renders the distinct recent search terms as numbered shortcuts; pressing the
//! corresponding digit re-issues that search.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HistoryInfo;

/// Renders the recent-search row at the specified row.
///
/// Format: ` Recent:  [1] react  [2] redux  …` with dimmed styling. Returns
/// the next available row position.
pub fn render_history_row(row: usize, history: &HistoryInfo, theme: &Theme, _cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" Recent: ");

    for (index, term) in history.terms.iter().enumerate() {
        print!(" [{}] {}", index + 1, term);
    }

    print!("{}", Theme::reset());
    row + 1
}

//! Fetch status banner renderer.
//!
//! Renders the loading or error banner shown between the search box and the
//! results table.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{StatusKind, StatusLine};

/// Renders the status banner at the specified row.
///
/// Loading banners use the loading accent; error banners use the error accent
/// with bold styling. Returns the next available row position.
pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, _cols: usize) -> usize {
    position_cursor(row, 1);

    match status.kind {
        StatusKind::Loading => {
            print!("{}", Theme::fg(&theme.colors.loading_fg));
        }
        StatusKind::Error => {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.error_fg));
        }
    }

    print!(" {}", status.message);
    print!("{}", Theme::reset());
    row + 1
}

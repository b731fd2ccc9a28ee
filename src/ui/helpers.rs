//! Shared rendering utilities.
//!
//! Low-level helpers used across UI components: cursor positioning, screen
//! clearing, and rendering text with highlighted character ranges (search term
//! matches in story titles).

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI escape sequence `\x1b[{row};{col}H`. Coordinates are
/// 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the whole screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Renders text with highlighted character ranges.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use the match highlight colors unless
/// the row is selected, in which case the selection background takes precedence
/// and highlighting is skipped entirely.
///
/// Ranges use character indices (not byte indices), `(start, end)` with end
/// exclusive, and are expected in ascending, non-overlapping order, which is
/// the shape produced by the view model computation. Out-of-bounds ranges are
/// clamped.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

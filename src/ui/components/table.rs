//! Results table renderer.
//!
//! Renders the story list as a four-column table (TITLE, AUTHOR, COMMENTS,
//! POINTS) with selection highlighting, search term highlighting in titles,
//! and a direction indicator on the active sort column (already baked into the
//! header labels by the view model).

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, TableHeaderInfo};

/// Fixed width of the AUTHOR column.
pub const AUTHOR_WIDTH: usize = 16;

/// Fixed width of the COMMENTS column.
pub const COMMENTS_WIDTH: usize = 10;

/// Fixed width of the POINTS column.
pub const POINTS_WIDTH: usize = 8;

/// Spaces between adjacent columns.
pub const COLUMN_GAP: usize = 2;

/// Width of the TITLE column for a given terminal width.
///
/// The title takes whatever is left after the fixed columns and gaps, with a
/// floor so narrow terminals still show something readable.
#[must_use]
pub fn title_column_width(cols: usize) -> usize {
    cols.saturating_sub(AUTHOR_WIDTH + COMMENTS_WIDTH + POINTS_WIDTH + 3 * COLUMN_GAP)
        .max(16)
}

/// Renders the table column headers at the specified row.
///
/// Returns the next available row position.
pub fn render_table_header(row: usize, header: &TableHeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);
    let [title, author, comments, points] = &header.columns;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<tw$}  {:<aw$}  {:>cw$}  {:>pw$}",
        pad_to(title, title_width),
        pad_to(author, AUTHOR_WIDTH),
        comments,
        points,
        tw = title_width,
        aw = AUTHOR_WIDTH,
        cw = COMMENTS_WIDTH,
        pw = POINTS_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// Returns the next available row position.
pub fn render_table_rows(row: usize, items: &[DisplayRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single story row.
///
/// Styling precedence: selection background over the whole line, then search
/// term highlights within the title, then normal text color. The row is padded
/// to the full terminal width so the selection background renders as one bar.
fn render_table_row(row: usize, item: &DisplayRow, theme: &Theme, cols: usize) -> usize {
    let title_width = title_column_width(cols);

    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);

    let title_len = item.title.chars().count().min(title_width);
    print!("{}", " ".repeat(title_width.saturating_sub(title_len) + COLUMN_GAP));

    let author = pad_to(&item.author, AUTHOR_WIDTH);
    print!("{author:<aw$}", aw = AUTHOR_WIDTH);
    print!("{}", " ".repeat(COLUMN_GAP));

    print!("{:>cw$}", item.num_comments, cw = COMMENTS_WIDTH);
    print!("{}", " ".repeat(COLUMN_GAP));
    print!("{:>pw$}", item.points, pw = POINTS_WIDTH);

    let line_len = title_width + AUTHOR_WIDTH + COMMENTS_WIDTH + POINTS_WIDTH + 3 * COLUMN_GAP;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Truncates a cell value to its column width, character-safe.
fn pad_to(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        text.chars().take(width).collect()
    }
}

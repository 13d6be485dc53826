//! Table component renderer.
//!
//! This module renders one page of results as a three-column table (title,
//! year, type) with selection and fuzzy match highlighting.

use crate::ui::helpers::{self, char_len, clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeaders, DisplayItem};

const YEAR_WIDTH: usize = 12;

/// Renders the column headings at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, columns: &ColumnHeaders, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{}{}{}",
        pad(&columns.title, columns.title_width + 2),
        pad(&columns.year, YEAR_WIDTH),
        columns.kind
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row`.
///
/// # Returns
///
/// The next available row position (row + number of items)
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    columns: &ColumnHeaders,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, columns.title_width, theme, cols);
    }
    current_row
}

/// Renders a single result row.
///
/// # Layout
///
/// ```text
/// TITLE (title_width) [2 spaces] YEAR (12) TYPE [padding to fill line]
/// ```
///
/// The whole line is padded so the selection background spans the pane.
fn render_table_row(row: usize, item: &DisplayItem, title_width: usize, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat((title_width + 2).saturating_sub(char_len(&item.title))));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", pad(&item.year, YEAR_WIDTH));
    print!("{}", item.kind);

    let line_len = title_width + 2 + YEAR_WIDTH + char_len(&item.kind);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Left-aligns `text` in a field of `width` characters, cutting if needed.
fn pad(text: &str, width: usize) -> String {
    let clipped = clip(text, width.saturating_sub(1));
    let fill = width.saturating_sub(char_len(&clipped));
    format!("{clipped}{}", " ".repeat(fill))
}

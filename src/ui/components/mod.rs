//! Composable UI component renderers.
//!
//! Each component renders one part of the interface at a given row and
//! returns the next free row where that is meaningful.
//!
//! # Components
//!
//! - `header`: Title bar with the result count
//! - `footer`: Keybinding hints
//! - `search`: Query box and loading line
//! - `table`: Result table with TITLE, YEAR, and TYPE columns
//! - `empty`: Message panel for welcome, nothing found, and errors
//! - `pager`: Previous/next page indicator
//! - `modal`: Details overlay

mod empty;
mod footer;
mod header;
mod modal;
mod pager;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use pager::render_pager;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full pane layout.
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 3 lines]
/// [Loading line]
/// [Table Headers]          or   [blank line]
/// [Table Rows]                  [Message panel]
/// [Blank padding to fill screen]
/// [Pager]
/// [Border]
/// [Footer]
/// ```
///
/// The details modal, when present, is drawn last on top of everything else.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, &vm.columns, theme);
        render_table_rows(current_row, &vm.display_items, &vm.columns, theme, cols);
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(pager) = &vm.pager {
        render_pager(border_row.saturating_sub(1), pager, theme, cols);
    }
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(modal) = &vm.modal {
        render_modal(modal, theme, cols, rows);
    }
}

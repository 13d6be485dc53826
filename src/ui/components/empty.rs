//! Message panel renderer.
//!
//! Shown in place of the results table for the welcome message, when a search
//! finds nothing, and when a lookup fails.

use crate::ui::helpers::print_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered headline at `row` with a dimmed subtitle below it.
///
/// Errors use `error_fg`; other messages use `empty_state_fg`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let color = if empty.is_error {
        &theme.colors.error_fg
    } else {
        &theme.colors.empty_state_fg
    };

    print_centered(row, &empty.message, &format!("{}{}", Theme::bold(), Theme::fg(color)), cols);
    print_centered(
        row + 1,
        &empty.subtitle,
        &format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        cols,
    );
}

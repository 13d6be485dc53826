//! Search bar component renderer.
//!
//! Renders the bordered query box and, below it, the loading indicator line.

use crate::ui::helpers::{char_len, clip, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box and the loading line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 4: three box lines plus the loading
/// line)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ Search: batman▏  │ [margin]
/// [margin] └──────────────────┘ [margin]
/// [margin] Searching "batman" (page 1)...
/// ```
///
/// The border is drawn dim when the result list has focus, and a cursor mark
/// follows the query while typing.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border_color = if search.is_focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.text_dim
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.is_focused { "▏" } else { "" };
    let search_text = clip(&format!(" {}: {}{cursor}", search.prompt, search.query), inner_width);
    let padding = inner_width.saturating_sub(char_len(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 3, 1);
    let loading = search
        .loading
        .as_deref()
        .map(|text| clip(text, box_width))
        .unwrap_or_default();
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.accent_fg));
    print!("{loading}");
    print!("{}", " ".repeat(cols.saturating_sub(SEARCH_BOX_MARGIN + char_len(&loading))));
    print!("{}", Theme::reset());

    row + 4
}

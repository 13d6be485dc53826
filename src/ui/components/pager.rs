//! Pager line renderer.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PagerInfo;

/// Renders `◀  Page 2 of 3  ▶` centered at `row`.
///
/// Arrows for unavailable directions are drawn dim.
pub fn render_pager(row: usize, pager: &PagerInfo, theme: &Theme, cols: usize) {
    let arrow_color = |enabled: bool| {
        if enabled {
            Theme::fg(&theme.colors.accent_fg)
        } else {
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
        }
    };

    let text_len = char_len(&pager.label) + 6;
    let padding = cols.saturating_sub(text_len) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));
    print!("{}◀{}", arrow_color(pager.has_previous), Theme::reset());
    print!("{}  {}  ", Theme::fg(&theme.colors.text_normal), pager.label);
    print!("{}▶{}", arrow_color(pager.has_next), Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
}

//! Details modal renderer.
//!
//! Draws a bordered box over the middle of the pane. Content lines are built
//! first, then the box is sized to fit them.

use crate::ui::helpers::{char_len, clip, position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalInfo;

const MAX_MODAL_WIDTH: usize = 72;
const MODAL_MARGIN: usize = 4;

/// Role of a content line, which selects its color.
#[derive(Clone, Copy, PartialEq, Eq)]
enum LineStyle {
    Title,
    Dim,
    Accent,
    Normal,
    Error,
}

/// Renders the modal overlay.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────┐
/// │ Batman Begins                │
/// │ 2005 · 140 min · Movie       │
/// │                              │
/// │ 8.2/10  Internet Movie Data… │
/// │                              │
/// │ Director: Christopher Nolan  │
/// │ Plot:                        │
/// │ After witnessing his ...     │
/// └──────────────────────────────┘
/// ```
///
/// Lines that do not fit the pane height are dropped from the bottom.
pub fn render_modal(modal: &ModalInfo, theme: &Theme, cols: usize, rows: usize) {
    let width = cols.saturating_sub(MODAL_MARGIN * 2).min(MAX_MODAL_WIDTH).max(12);
    let inner_width = width - 4;

    let mut lines = build_lines(modal, inner_width);
    let max_lines = rows.saturating_sub(4).max(1);
    lines.truncate(max_lines);

    let height = lines.len() + 2;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("┌{}┐", "─".repeat(width - 2));

    for (offset, (text, style)) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{}│ ", Theme::fg(&theme.colors.border));
        print!("{}", Theme::reset());
        match style {
            LineStyle::Title => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg)),
            LineStyle::Dim => print!("{}", Theme::fg(&theme.colors.text_dim)),
            LineStyle::Accent => print!("{}", Theme::fg(&theme.colors.accent_fg)),
            LineStyle::Normal => print!("{}", Theme::fg(&theme.colors.text_normal)),
            LineStyle::Error => print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.error_fg)),
        }
        print!("{text}");
        print!("{}", " ".repeat(inner_width.saturating_sub(char_len(text))));
        print!("{}", Theme::reset());
        print!("{} │", Theme::fg(&theme.colors.border));
    }

    position_cursor(top + height - 1, left);
    print!("└{}┘", "─".repeat(width - 2));
    print!("{}", Theme::reset());
}

fn build_lines(modal: &ModalInfo, width: usize) -> Vec<(String, LineStyle)> {
    let mut lines = vec![];
    for line in wrap_text(&modal.title, width) {
        lines.push((line, LineStyle::Title));
    }

    if let Some(message) = &modal.message {
        lines.push((String::new(), LineStyle::Normal));
        let style = if modal.is_error { LineStyle::Error } else { LineStyle::Dim };
        for line in wrap_text(message, width) {
            lines.push((line, style));
        }
        return lines;
    }

    if let Some(meta) = &modal.meta {
        for line in wrap_text(meta, width) {
            lines.push((line, LineStyle::Dim));
        }
    }

    if !modal.ratings.is_empty() {
        lines.push((String::new(), LineStyle::Normal));
        for (value, source) in &modal.ratings {
            lines.push((clip(&format!("{value}  {source}"), width), LineStyle::Accent));
        }
    }

    if !modal.fields.is_empty() {
        lines.push((String::new(), LineStyle::Normal));
        for (label, value) in &modal.fields {
            for line in wrap_text(&format!("{label}: {value}"), width) {
                lines.push((line, LineStyle::Normal));
            }
        }
    }

    if let Some((label, text)) = &modal.plot {
        lines.push((String::new(), LineStyle::Normal));
        lines.push((format!("{label}:"), LineStyle::Dim));
        for line in wrap_text(text, width) {
            lines.push((line, LineStyle::Normal));
        }
    }

    lines
}

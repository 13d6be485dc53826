//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, fuzzy match
//! highlighting, and width-aware text layout. All widths are counted in
//! characters, not bytes, so Cyrillic titles and labels line up.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with exclusive end. Ranges
/// reaching past the end of `text` are clipped. When `is_selected` is `true`
/// the text is printed plain so the selection background stays intact.
///
/// # Example
///
/// ```rust
/// use movieseek::ui::helpers::render_highlighted_text;
/// use movieseek::ui::Theme;
///
/// let theme = Theme::default();
/// render_highlighted_text("Batman Begins", &[(0, 3)], &theme, false);
/// ```
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
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

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

/// Greedy word wrap to lines of at most `width` characters.
///
/// Words longer than `width` are split. Returns no lines for blank input.
///
/// # Example
///
/// ```rust
/// use movieseek::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("a young Bruce Wayne", 8), vec!["a young", "Bruce", "Wayne"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let line_len = char_len(&line);
        if line_len > 0 && line_len + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Prints `text` centered on `row`, padded with spaces to the full width.
///
/// `style` escapes are applied before the padding so backgrounds span the
/// line; styling is reset afterwards. Text wider than `cols` is cut.
pub fn print_centered(row: usize, text: &str, style: &str, cols: usize) {
    let text = clip(text, cols);
    let len = char_len(&text);
    let left = (cols - len) / 2;

    position_cursor(row, 1);
    let right = cols - len - left;
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}

/// Cuts `text` to at most `width` characters.
#[must_use]
pub fn clip(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_width() {
        let plot = "After witnessing his parents' death, Bruce learns the art of fighting";
        let lines = wrap_text(plot, 20);
        assert!(lines.iter().all(|l| char_len(l) <= 20));
        assert_eq!(lines.join(" "), plot);
    }

    #[test]
    fn wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn wrap_counts_chars_not_bytes() {
        assert_eq!(wrap_text("Фільм Серіал", 6), vec!["Фільм", "Серіал"]);
    }

    #[test]
    fn wrap_blank_is_empty() {
        assert!(wrap_text("   ", 10).is_empty());
    }

    #[test]
    fn clip_is_char_based() {
        assert_eq!(clip("Режисер", 3), "Реж");
        assert_eq!(clip("ab", 5), "ab");
    }
}

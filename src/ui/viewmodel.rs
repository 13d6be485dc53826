//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: localized strings,
//! truncated titles, highlight ranges, and enable flags.

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Rows of the results table visible in the current window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,
    pub footer: FooterInfo,
    pub search_bar: SearchBarInfo,
    pub columns: ColumnHeaders,

    /// Message panel replacing the table (welcome, nothing found, errors).
    pub empty_state: Option<EmptyState>,

    /// Pager line; `None` when there is at most one page.
    pub pager: Option<PagerInfo>,

    /// Details overlay; `None` when the modal is closed.
    pub modal: Option<ModalInfo>,
}

/// One row in the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Title, truncated to the column width.
    pub title: String,
    pub year: String,
    /// Localized media type.
    pub kind: String,
    pub is_selected: bool,

    /// Character ranges of `title` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Results table column headings.
#[derive(Debug, Clone)]
pub struct ColumnHeaders {
    pub title: String,
    pub year: String,
    pub kind: String,
    /// Width of the title column in characters.
    pub title_width: usize,
}

/// Message panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
    /// Errors are drawn in the error color.
    pub is_error: bool,
}

/// Search box content.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub prompt: String,
    pub query: String,
    /// Whether keystrokes currently edit the query.
    pub is_focused: bool,
    /// Loading text shown under the box while a request is in flight.
    pub loading: Option<String>,
}

/// Pager line content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerInfo {
    /// "Page N of M" in the active locale.
    pub label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

/// Details modal content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub title: String,
    /// Year, runtime, type, and genre joined into one line.
    pub meta: Option<String>,
    /// `(value, source)` pairs.
    pub ratings: Vec<(String, String)>,
    /// Labelled single-line fields such as director and actors.
    pub fields: Vec<(String, String)>,
    /// Plot heading and text.
    pub plot: Option<(String, String)>,
    /// Loading or error text shown instead of the details.
    pub message: Option<String>,
    pub is_error: bool,
}

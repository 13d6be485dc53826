//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the pane shows.
//! It owns the [`SearchController`] (query, page, result count, debounce and
//! request bookkeeping) and adds the presentation-side state around it: the
//! raw input buffer, the current page of results, the selection, the input
//! mode, and the details modal.
//!
//! # Command Application
//!
//! Controller operations return [`Command`]s. [`AppState::apply_commands`]
//! folds notifications into view state and turns the rest into [`Action`]s for
//! the plugin runtime:
//!
//! ```text
//! Command::ArmDebounce(d)  → Action::ScheduleTimer(d)
//! Command::Fetch(request)  → Action::WebRequest { url, tag: search(id) }
//! Command::Notify(n)       → results / status updated in place
//! ```

use fuzzy_matcher::skim::SkimMatcherV2;

use super::actions::Action;
use super::modes::{DetailView, InputMode, SearchStatus};
use crate::api::{classify_details, HttpReply, OmdbClient, RequestTag};
use crate::domain::{ErrorKind, MovieSummary};
use crate::i18n::Catalog;
use crate::search::{Command, Notification, RequestId, SearchController};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ColumnHeaders, DisplayItem, EmptyState, FooterInfo, HeaderInfo, ModalInfo, PagerInfo,
    SearchBarInfo, UIViewModel,
};

/// Rows taken by everything except table rows: blank line, header, border,
/// search box (3), loading line, column headings, pager, border, footer, and
/// the trailing blank line.
const CHROME_ROWS: usize = 12;

/// Width of the year column including its separator.
const YEAR_COLUMN_WIDTH: usize = 12;

/// Width of the type column including its separator.
const KIND_COLUMN_WIDTH: usize = 10;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Search and paging core.
    pub controller: SearchController,

    /// Builds request URLs for the configured endpoint.
    pub client: OmdbClient,

    /// Localized strings.
    pub catalog: Catalog,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Raw search box content, edited by `Char` and `Backspace`.
    pub query_input: String,

    /// Current page of results, in API order.
    pub results: Vec<MovieSummary>,

    /// Zero-based index into `results`; wraps during navigation.
    pub selected_index: usize,

    pub input_mode: InputMode,
    pub status: SearchStatus,
    pub details: DetailView,

    last_detail_request: RequestId,
    /// The only details request whose reply will be applied.
    pending_detail: Option<RequestId>,
}

impl AppState {
    /// Creates the initial state: empty input, welcome message, typing mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use movieseek::api::OmdbClient;
    /// use movieseek::app::AppState;
    /// use movieseek::i18n::Catalog;
    /// use movieseek::search::SearchController;
    /// use movieseek::ui::Theme;
    ///
    /// let state = AppState::new(
    ///     SearchController::default(),
    ///     OmdbClient::default(),
    ///     Catalog::default(),
    ///     Theme::default(),
    /// );
    /// assert!(state.results.is_empty());
    /// ```
    #[must_use]
    pub fn new(controller: SearchController, client: OmdbClient, catalog: Catalog, theme: Theme) -> Self {
        Self {
            controller,
            client,
            catalog,
            theme,
            query_input: String::new(),
            results: vec![],
            selected_index: 0,
            input_mode: InputMode::Typing,
            status: SearchStatus::Welcome,
            details: DetailView::Closed,
            last_detail_request: 0,
            pending_detail: None,
        }
    }

    /// Moves selection down by one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves selection up by one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    #[must_use]
    pub fn selected_movie(&self) -> Option<&MovieSummary> {
        self.results.get(self.selected_index)
    }

    /// Carries out controller commands.
    ///
    /// Notifications update view state immediately; timers and fetches are
    /// returned as actions, in order.
    pub fn apply_commands(&mut self, commands: Vec<Command>) -> Vec<Action> {
        let mut actions = Vec::with_capacity(commands.len());

        for command in commands {
            match command {
                Command::ArmDebounce(delay) => actions.push(Action::ScheduleTimer(delay)),
                Command::Fetch(request) => actions.push(Action::WebRequest {
                    url: self.client.search_url(&request.query, request.page),
                    tag: RequestTag::search(request.id),
                }),
                Command::Notify(notification) => self.apply_notification(notification),
            }
        }

        actions
    }

    fn apply_notification(&mut self, notification: Notification) {
        match notification {
            Notification::Cleared => {
                self.results.clear();
                self.selected_index = 0;
                self.status = SearchStatus::Welcome;
            }
            Notification::Loading { query, page } => {
                self.status = SearchStatus::Loading { query, page };
            }
            Notification::Success { items, .. } => {
                self.results = items;
                self.selected_index = 0;
                self.status = SearchStatus::Results;
            }
            Notification::Empty { reason } => {
                self.show_problem(ErrorKind::NoResults { reason });
            }
            Notification::Failure(kind) => {
                self.show_problem(kind);
            }
        }
    }

    fn show_problem(&mut self, kind: ErrorKind) {
        self.results.clear();
        self.selected_index = 0;
        self.input_mode = InputMode::Typing;
        self.status = SearchStatus::Problem(kind);
    }

    /// Starts a details lookup for the selected row.
    ///
    /// Returns `None` when nothing is selected.
    pub fn begin_details_lookup(&mut self) -> Option<Action> {
        let movie = self.selected_movie()?;
        let url = self.client.details_url(&movie.imdb_id);
        let title = movie.title.clone();

        self.last_detail_request += 1;
        let id = self.last_detail_request;
        self.pending_detail = Some(id);
        self.details = DetailView::Loading { title };

        tracing::debug!(request_id = id, url = %url, "requesting details");

        Some(Action::WebRequest {
            url,
            tag: RequestTag::details(id),
        })
    }

    /// Applies the reply to details request `id`.
    ///
    /// Returns `false` when the reply is stale (modal closed or a newer lookup
    /// started) and was dropped.
    pub fn resolve_details(&mut self, id: RequestId, reply: &HttpReply) -> bool {
        if self.pending_detail != Some(id) {
            tracing::debug!(request_id = id, pending = ?self.pending_detail, "dropping stale details reply");
            return false;
        }
        self.pending_detail = None;

        self.details = match classify_details(reply) {
            Ok(details) => DetailView::Open(details),
            Err(kind) => {
                tracing::warn!(request_id = id, error = %kind, "details lookup failed");
                DetailView::Failed(kind)
            }
        };
        true
    }

    pub fn close_details(&mut self) {
        self.details = DetailView::Closed;
        self.pending_detail = None;
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Subtract UI chrome from `rows` to get the table height
    /// 2. Center the window on the selected row
    /// 3. Shift the window back if it runs past the end of the results
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let title_width = cols
            .saturating_sub(YEAR_COLUMN_WIDTH + KIND_COLUMN_WIDTH + 2)
            .max(10);
        let (title_heading, year_heading, kind_heading) = self.catalog.columns();

        let mut vm = UIViewModel {
            display_items: vec![],
            selected_index: 0,
            header: self.compute_header(),
            footer: self.compute_footer(),
            search_bar: self.compute_search_bar(),
            columns: ColumnHeaders {
                title: title_heading.to_string(),
                year: year_heading.to_string(),
                kind: kind_heading.to_string(),
                title_width,
            },
            empty_state: self.compute_empty_state(),
            pager: self.compute_pager(),
            modal: self.compute_modal(),
        };

        if self.results.is_empty() {
            return vm;
        }

        let available_rows = rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(self.results.len());
        if visible_end - visible_start < available_rows && self.results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let query = &self.controller.state().query;
        let matcher = (!query.is_empty()).then(SkimMatcherV2::default);

        vm.display_items = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, movie)| {
                self.compute_display_item(movie, visible_start + relative_idx, title_width, matcher.as_ref())
            })
            .collect();
        vm.selected_index = self.selected_index.saturating_sub(visible_start);

        vm
    }

    fn compute_display_item(
        &self,
        movie: &MovieSummary,
        absolute_idx: usize,
        title_width: usize,
        matcher: Option<&SkimMatcherV2>,
    ) -> DisplayItem {
        let title = truncate_chars(&movie.title, title_width);
        let visible_chars = title.chars().count();

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| {
            compute_highlight_ranges(&movie.title, &self.controller.state().query, m)
                .into_iter()
                .filter(|&(start, _)| start < visible_chars)
                .map(|(start, end)| (start, end.min(visible_chars)))
                .collect()
        });

        DisplayItem {
            title,
            year: movie.year.clone(),
            kind: self.catalog.media_kind(&movie.kind),
            is_selected: absolute_idx == self.selected_index,
            highlight_ranges,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: self.catalog.header_title(self.controller.state().total_results),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.details.is_open() {
            "Esc/q/Enter: close details"
        } else {
            match self.input_mode {
                InputMode::Typing => {
                    "Type to search  Enter/Tab: results  PgUp/PgDn: page  Ctrl+u: clear  Esc: clear, then quit"
                }
                InputMode::Browsing => {
                    "j/k: navigate  h/l: page  Enter: details  /: edit query  q: quit"
                }
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let loading = match &self.status {
            SearchStatus::Loading { query, page } => Some(self.catalog.loading(query, *page)),
            _ => None,
        };

        SearchBarInfo {
            prompt: self.catalog.search_prompt().to_string(),
            query: self.query_input.clone(),
            is_focused: self.input_mode == InputMode::Typing && !self.details.is_open(),
            loading,
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        let (message, is_error) = match &self.status {
            SearchStatus::Welcome => (self.catalog.welcome(), false),
            SearchStatus::Problem(kind) => (
                self.catalog.error(kind),
                !matches!(kind, ErrorKind::NoResults { .. }),
            ),
            SearchStatus::PermissionDenied => (self.catalog.permission_denied(), true),
            SearchStatus::Loading { .. } | SearchStatus::Results => return None,
        };

        Some(EmptyState {
            message: message.title,
            subtitle: message.body,
            is_error,
        })
    }

    fn compute_pager(&self) -> Option<PagerInfo> {
        if self.results.is_empty() {
            return None;
        }

        let pagination = self.controller.state().pagination();
        pagination.is_visible().then(|| PagerInfo {
            label: self.catalog.page_label(pagination.page, pagination.total_pages),
            has_previous: pagination.has_previous(),
            has_next: pagination.has_next(),
        })
    }

    fn compute_modal(&self) -> Option<ModalInfo> {
        let empty = |title: String, message: String, is_error: bool| ModalInfo {
            title,
            meta: None,
            ratings: vec![],
            fields: vec![],
            plot: None,
            message: Some(message),
            is_error,
        };

        match &self.details {
            DetailView::Closed => None,
            DetailView::Loading { title } => Some(empty(
                title.clone(),
                self.catalog.details_loading(title),
                false,
            )),
            DetailView::Failed(kind) => {
                let message = self.catalog.error(kind);
                Some(empty(message.title, message.body, true))
            }
            DetailView::Open(details) => {
                let meta_parts: Vec<String> = [
                    Some(details.year.clone()).filter(|y| !y.is_empty()),
                    details.runtime.clone(),
                    Some(self.catalog.media_kind(&details.kind)).filter(|k| !k.is_empty()),
                    details.genre.clone(),
                ]
                .into_iter()
                .flatten()
                .collect();

                let mut fields = vec![];
                if let Some(director) = &details.director {
                    fields.push((self.catalog.director_label().to_string(), director.clone()));
                }
                if let Some(actors) = &details.actors {
                    fields.push((self.catalog.actors_label().to_string(), actors.clone()));
                }

                Some(ModalInfo {
                    title: details.title.clone(),
                    meta: (!meta_parts.is_empty()).then(|| meta_parts.join(" · ")),
                    ratings: details
                        .ratings
                        .iter()
                        .map(|r| (r.value.clone(), r.source.clone()))
                        .collect(),
                    fields,
                    plot: details
                        .plot
                        .as_ref()
                        .map(|plot| (self.catalog.plot_label().to_string(), plot.clone())),
                    message: None,
                    is_error: false,
                })
            }
        }
    }
}

/// Truncates `text` to `max_chars` characters, ending with "..." when cut.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("...");
    truncated
}

/// Computes character index ranges to highlight for fuzzy match visualization.
///
/// Consecutive matched indices are coalesced into `(start, end)` ranges with an
/// exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;
    use crate::search::QueryOutcome;

    fn state() -> AppState {
        AppState::new(
            SearchController::default(),
            OmdbClient::default(),
            Catalog::default(),
            Theme::default(),
        )
    }

    fn movie(title: &str) -> MovieSummary {
        MovieSummary {
            title: title.to_string(),
            year: "2005".to_string(),
            imdb_id: "tt0372784".to_string(),
            poster: None,
            kind: MediaKind::Movie,
        }
    }

    fn show_results(state: &mut AppState, titles: &[&str], total: u64) {
        let commands = state.controller.search("batman", 1).unwrap();
        let actions = state.apply_commands(commands);
        let Action::WebRequest { tag, .. } = &actions[0] else {
            panic!("expected a web request");
        };
        let commands = state.controller.on_query_resolved(
            tag.id,
            QueryOutcome::Success {
                items: titles.iter().map(|t| movie(t)).collect(),
                total_results: total,
            },
        );
        state.apply_commands(commands);
    }

    #[test]
    fn fetch_becomes_search_url_request() {
        let mut s = state();
        let commands = s.controller.search("batman", 2).unwrap();
        let actions = s.apply_commands(commands);

        assert_eq!(
            actions,
            vec![Action::WebRequest {
                url: "https://www.omdbapi.com/?apikey=b70853b4&s=batman&page=2".to_string(),
                tag: RequestTag::search(1),
            }]
        );
        assert_eq!(
            s.status,
            SearchStatus::Loading {
                query: "batman".to_string(),
                page: 2
            }
        );
    }

    #[test]
    fn selection_wraps() {
        let mut s = state();
        show_results(&mut s, &["Batman", "Batman Begins", "Batman Returns"], 3);

        s.move_selection_up();
        assert_eq!(s.selected_index, 2);
        s.move_selection_down();
        assert_eq!(s.selected_index, 0);
    }

    #[test]
    fn pager_visible_only_with_multiple_pages() {
        let mut s = state();
        show_results(&mut s, &["Batman"], 7);
        assert!(s.compute_viewmodel(40, 100).pager.is_none());

        show_results(&mut s, &["Batman"], 23);
        let pager = s.compute_viewmodel(40, 100).pager.unwrap();
        assert_eq!(pager.label, "Page 1 of 3");
        assert!(!pager.has_previous);
        assert!(pager.has_next);
    }

    #[test]
    fn welcome_message_before_first_search() {
        let vm = state().compute_viewmodel(40, 100);
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "Start searching");
        assert!(!empty.is_error);
    }

    #[test]
    fn highlights_stay_inside_truncated_title() {
        let mut s = state();
        let long = format!("{} batman", "x".repeat(60));
        show_results(&mut s, &[long.as_str()], 1);

        let vm = s.compute_viewmodel(40, 50);
        let item = &vm.display_items[0];
        let visible = item.title.chars().count();
        assert!(item.title.ends_with("..."));
        assert!(item.highlight_ranges.iter().all(|&(start, end)| start < end && end <= visible));
    }

    #[test]
    fn window_follows_selection() {
        let mut s = state();
        let titles: Vec<String> = (0..10).map(|i| format!("Batman {i}")).collect();
        let refs: Vec<&str> = titles.iter().map(String::as_str).collect();
        show_results(&mut s, &refs, 10);
        s.selected_index = 9;

        let vm = s.compute_viewmodel(CHROME_ROWS + 4, 100);
        assert_eq!(vm.display_items.len(), 4);
        assert_eq!(vm.display_items.last().unwrap().title, "Batman 9");
        assert_eq!(vm.selected_index, 3);
    }

    #[test]
    fn stale_details_reply_is_dropped() {
        let mut s = state();
        show_results(&mut s, &["Batman Begins"], 1);

        let Some(Action::WebRequest { tag, url }) = s.begin_details_lookup() else {
            panic!("expected details request");
        };
        assert!(url.contains("i=tt0372784"));
        s.close_details();

        let reply = HttpReply::Received {
            status: 200,
            body: br#"{"Title":"Batman Begins","Response":"True"}"#.to_vec(),
        };
        assert!(!s.resolve_details(tag.id, &reply));
        assert_eq!(s.details, DetailView::Closed);
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate_chars("Амелі", 10), "Амелі");
        assert_eq!(truncate_chars("Бетмен починається", 8), "Бетме...");
    }

    #[test]
    fn highlight_ranges_coalesce() {
        let matcher = SkimMatcherV2::default();
        assert_eq!(compute_highlight_ranges("Batman Begins", "bat", &matcher), vec![(0, 3)]);
        assert!(compute_highlight_ranges("Superman", "xyz", &matcher).is_empty());
    }
}

//! Debounced, paginated search controller.
//!
//! [`SearchController`] turns raw input changes and pager presses into at most
//! one applied query at a time. It does no I/O: every operation returns a list
//! of [`Command`]s that the application layer carries out (arm a host timer,
//! issue a web request, update the view), and results are fed back through
//! [`SearchController::on_query_resolved`].
//!
//! # Flow
//!
//! ```text
//! on_input_changed ──► ArmDebounce ──► (host timer) ──► on_debounce_elapsed
//!                                                              │
//! go_to_previous_page / go_to_next_page ───────────────────► search
//!                                                              │
//!                                               Notify(Loading) + Fetch
//!                                                              │
//!                                 (host web request) ──► on_query_resolved
//!                                                              │
//!                                    Notify(Success | Empty | Failure)
//! ```
//!
//! Every issued request carries a monotonically increasing [`RequestId`]. Only
//! the most recently issued request may resolve; replies for superseded
//! requests are dropped so a slow page-1 reply can never overwrite page 2.

use std::time::Duration;

use super::debounce::Debouncer;
use super::pagination::total_pages;
use super::state::{query_len, SearchState, MIN_QUERY_CHARS};
use crate::domain::error::{ErrorKind, MovieSeekError, Result};
use crate::domain::MovieSummary;

/// Sequence number tagging each issued request.
pub type RequestId = u64;

/// One search attempt, immutable once issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub id: RequestId,
    pub query: String,
    pub page: u32,
}

/// Classified result of a search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// One page of matches plus the total match count.
    Success {
        items: Vec<MovieSummary>,
        total_results: u64,
    },
    /// The API answered but found nothing; `reason` is its message.
    Empty { reason: String },
    /// The request failed.
    Failure(ErrorKind),
}

/// What the view should show after a controller transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Input was cleared; show the welcome state.
    Cleared,
    /// A request for `query` at `page` is in flight.
    Loading { query: String, page: u32 },
    /// A page of results arrived.
    Success {
        items: Vec<MovieSummary>,
        page: u32,
        total_pages: u32,
    },
    /// No matches; `reason` is the API's message.
    Empty { reason: String },
    /// The lookup failed.
    Failure(ErrorKind),
}

/// Side effects requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set a host timer; when it fires call
    /// [`SearchController::on_debounce_elapsed`].
    ArmDebounce(Duration),
    /// Issue the request; deliver its outcome to
    /// [`SearchController::on_query_resolved`].
    Fetch(QueryRequest),
    /// Update the view.
    Notify(Notification),
}

/// Owns search and paging state for one plugin instance.
#[derive(Debug, Clone)]
pub struct SearchController {
    state: SearchState,
    debouncer: Debouncer,
    /// Trimmed input captured when the debounce timer was last armed.
    pending_query: Option<String>,
    last_request_id: RequestId,
    /// The only request whose outcome will be applied.
    in_flight: Option<RequestId>,
}

impl SearchController {
    #[must_use]
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: SearchState::default(),
            debouncer: Debouncer::new(debounce),
            pending_query: None,
            last_request_id: 0,
            in_flight: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether a request has been issued and not yet resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Reacts to the search box content changing.
    ///
    /// - empty after trimming: cancels any pending debounce, resets state to
    ///   page 1 with no results, and emits [`Notification::Cleared`]
    /// - one character: cancels any pending debounce without searching or
    ///   touching the results on screen
    /// - two or more: (re)arms the debounce timer; the search is issued by
    ///   [`Self::on_debounce_elapsed`]
    pub fn on_input_changed(&mut self, raw: &str) -> Vec<Command> {
        let trimmed = raw.trim();
        let len = query_len(trimmed);

        if len == 0 {
            tracing::debug!("input cleared, resetting search state");
            self.debouncer.cancel();
            self.pending_query = None;
            self.in_flight = None;
            self.state = SearchState::default();
            return vec![Command::Notify(Notification::Cleared)];
        }

        if len < MIN_QUERY_CHARS {
            tracing::trace!(len, "input below minimum query length");
            self.debouncer.cancel();
            self.pending_query = None;
            return vec![];
        }

        self.debouncer.arm();
        self.pending_query = Some(trimmed.to_string());
        vec![Command::ArmDebounce(self.debouncer.delay())]
    }

    /// Handles a host timer tick.
    ///
    /// Searches page 1 of the captured query when the tick belongs to the
    /// latest armed timer; ticks of superseded or cancelled timers do nothing.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::search`] argument errors.
    pub fn on_debounce_elapsed(&mut self) -> Result<Vec<Command>> {
        if !self.debouncer.fire() {
            return Ok(vec![]);
        }

        match self.pending_query.take() {
            Some(query) => self.search(&query, 1),
            None => Ok(vec![]),
        }
    }

    /// Commits `query` at `page` and issues one request for it.
    ///
    /// Emits [`Notification::Loading`] followed by a [`Command::Fetch`]. Any
    /// earlier in-flight request is superseded.
    ///
    /// # Errors
    ///
    /// - [`MovieSeekError::QueryTooShort`] if the trimmed query has fewer than
    ///   [`MIN_QUERY_CHARS`] characters
    /// - [`MovieSeekError::InvalidPage`] if `page` is 0
    ///
    /// State is left untouched on error.
    pub fn search(&mut self, query: &str, page: u32) -> Result<Vec<Command>> {
        let query = query.trim();
        if query_len(query) < MIN_QUERY_CHARS {
            return Err(MovieSeekError::QueryTooShort(query.to_string()));
        }
        if page == 0 {
            return Err(MovieSeekError::InvalidPage);
        }

        self.last_request_id += 1;
        let id = self.last_request_id;
        self.in_flight = Some(id);

        let total_results = if self.state.query == query {
            self.state.total_results
        } else {
            0
        };
        self.state = SearchState {
            query: query.to_string(),
            page,
            total_results,
        };

        tracing::debug!(request_id = id, query = %query, page, "issuing search");

        Ok(vec![
            Command::Notify(Notification::Loading {
                query: query.to_string(),
                page,
            }),
            Command::Fetch(QueryRequest {
                id,
                query: query.to_string(),
                page,
            }),
        ])
    }

    /// Re-issues the committed query one page back; no-op on the first page.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::search`] argument errors.
    pub fn go_to_previous_page(&mut self) -> Result<Vec<Command>> {
        if !self.state.pagination().has_previous() || self.state.query.is_empty() {
            return Ok(vec![]);
        }
        let query = self.state.query.clone();
        self.search(&query, self.state.page - 1)
    }

    /// Re-issues the committed query one page forward; no-op on the last page.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::search`] argument errors.
    pub fn go_to_next_page(&mut self) -> Result<Vec<Command>> {
        if !self.state.pagination().has_next() || self.state.query.is_empty() {
            return Ok(vec![]);
        }
        let query = self.state.query.clone();
        self.search(&query, self.state.page + 1)
    }

    /// Applies the outcome of request `id`.
    ///
    /// Outcomes for any request other than the latest issued one are dropped.
    /// Emits exactly one terminal notification otherwise.
    pub fn on_query_resolved(&mut self, id: RequestId, outcome: QueryOutcome) -> Vec<Command> {
        if self.in_flight != Some(id) {
            tracing::debug!(request_id = id, in_flight = ?self.in_flight, "dropping stale search reply");
            return vec![];
        }
        self.in_flight = None;

        let notification = match outcome {
            QueryOutcome::Success { items, total_results } if total_results > 0 => {
                self.state.total_results = total_results;
                let pages = total_pages(total_results);
                self.state.page = self.state.page.min(pages);
                tracing::debug!(
                    request_id = id,
                    total_results,
                    total_pages = pages,
                    page = self.state.page,
                    "search succeeded"
                );
                Notification::Success {
                    items,
                    page: self.state.page,
                    total_pages: pages,
                }
            }
            QueryOutcome::Success { .. } => {
                self.state.total_results = 0;
                Notification::Empty {
                    reason: String::new(),
                }
            }
            QueryOutcome::Empty { reason } => {
                tracing::debug!(request_id = id, reason = %reason, "search returned no results");
                self.state.total_results = 0;
                Notification::Empty { reason }
            }
            QueryOutcome::Failure(kind) => {
                tracing::warn!(request_id = id, error = %kind, "search failed");
                self.state.total_results = 0;
                Notification::Failure(kind)
            }
        };

        vec![Command::Notify(notification)]
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new(super::debounce::DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MediaKind;

    fn movie(n: usize) -> MovieSummary {
        MovieSummary {
            title: format!("Batman {n}"),
            year: "1989".to_string(),
            imdb_id: format!("tt{n:07}"),
            poster: None,
            kind: MediaKind::Movie,
        }
    }

    fn fetched(commands: &[Command]) -> Vec<QueryRequest> {
        commands
            .iter()
            .filter_map(|c| match c {
                Command::Fetch(req) => Some(req.clone()),
                _ => None,
            })
            .collect()
    }

    fn type_and_fire(controller: &mut SearchController, text: &str) -> QueryRequest {
        controller.on_input_changed(text);
        let commands = controller.on_debounce_elapsed().unwrap();
        fetched(&commands).pop().unwrap()
    }

    fn succeed(controller: &mut SearchController, req: &QueryRequest, total: u64) -> Vec<Command> {
        controller.on_query_resolved(
            req.id,
            QueryOutcome::Success {
                items: (0..10).map(movie).collect(),
                total_results: total,
            },
        )
    }

    #[test]
    fn short_input_never_arms_or_fetches() {
        let mut c = SearchController::default();
        assert!(c.on_input_changed("b").is_empty());
        assert!(c.on_input_changed("  b  ").is_empty());
        assert!(c.on_debounce_elapsed().unwrap().is_empty());
        assert!(!c.is_loading());
    }

    #[test]
    fn two_chars_arm_debounce() {
        let mut c = SearchController::default();
        let commands = c.on_input_changed("ba");
        assert_eq!(commands, vec![Command::ArmDebounce(Duration::from_millis(500))]);
    }

    #[test]
    fn batman_scenario_yields_three_pages() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        assert_eq!(req.query, "batman");
        assert_eq!(req.page, 1);
        assert!(c.is_loading());

        let commands = succeed(&mut c, &req, 23);
        match &commands[..] {
            [Command::Notify(Notification::Success { page, total_pages, items })] => {
                assert_eq!(*page, 1);
                assert_eq!(*total_pages, 3);
                assert_eq!(items.len(), 10);
            }
            other => panic!("unexpected commands: {other:?}"),
        }

        let pagination = c.state().pagination();
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[test]
    fn burst_of_keystrokes_issues_one_request() {
        let mut c = SearchController::default();
        for text in ["ba", "bat", "batm", "batma", "batman"] {
            c.on_input_changed(text);
        }

        let mut requests = vec![];
        for _ in 0..5 {
            requests.extend(fetched(&c.on_debounce_elapsed().unwrap()));
        }

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "batman");
    }

    #[test]
    fn previous_page_requests_immediately_with_same_query() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 23);

        let next = fetched(&c.go_to_next_page().unwrap()).pop().unwrap();
        assert_eq!(next.page, 2);
        succeed(&mut c, &next, 23);
        assert_eq!(c.state().page, 2);

        let commands = c.go_to_previous_page().unwrap();
        assert!(!commands.iter().any(|cmd| matches!(cmd, Command::ArmDebounce(_))));
        let prev = fetched(&commands).pop().unwrap();
        assert_eq!(prev.page, 1);
        assert_eq!(prev.query, "batman");
    }

    #[test]
    fn pager_is_noop_at_bounds() {
        let mut c = SearchController::default();
        assert!(c.go_to_next_page().unwrap().is_empty());
        assert!(c.go_to_previous_page().unwrap().is_empty());

        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 15);
        assert!(c.go_to_previous_page().unwrap().is_empty());

        let last = fetched(&c.go_to_next_page().unwrap()).pop().unwrap();
        succeed(&mut c, &last, 15);
        assert_eq!(c.state().page, 2);
        assert!(c.go_to_next_page().unwrap().is_empty());
    }

    #[test]
    fn clearing_resets_state_and_cancels_debounce() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 23);
        c.go_to_next_page().unwrap();

        c.on_input_changed("superman");
        let commands = c.on_input_changed("   ");
        assert_eq!(commands, vec![Command::Notify(Notification::Cleared)]);
        assert_eq!(c.state(), &SearchState::default());
        assert!(!c.is_loading());

        assert!(c.on_debounce_elapsed().unwrap().is_empty());
    }

    #[test]
    fn not_found_empties_and_hides_pager() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 23);

        let req = type_and_fire(&mut c, "zzzzqx");
        let commands = c.on_query_resolved(
            req.id,
            QueryOutcome::Empty {
                reason: "Movie not found!".to_string(),
            },
        );
        assert_eq!(
            commands,
            vec![Command::Notify(Notification::Empty {
                reason: "Movie not found!".to_string()
            })]
        );
        assert_eq!(c.state().total_results, 0);
        assert!(!c.state().pagination().is_visible());
    }

    #[test]
    fn failure_is_reported_and_controller_stays_usable() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        let kind = ErrorKind::Network {
            reason: "unreachable".to_string(),
        };
        let commands = c.on_query_resolved(req.id, QueryOutcome::Failure(kind.clone()));
        assert_eq!(commands, vec![Command::Notify(Notification::Failure(kind))]);

        let retry = type_and_fire(&mut c, "batman returns");
        assert_eq!(retry.page, 1);
    }

    #[test]
    fn stale_reply_does_not_overwrite_newer_state() {
        let mut c = SearchController::default();
        let first = type_and_fire(&mut c, "batman");
        succeed(&mut c, &first, 23);

        let page_one_again = fetched(&c.search("batman", 1).unwrap()).pop().unwrap();
        let page_two = fetched(&c.search("batman", 2).unwrap()).pop().unwrap();

        assert!(succeed(&mut c, &page_two, 23).len() == 1);
        assert!(succeed(&mut c, &page_one_again, 23).is_empty());
        assert_eq!(c.state().page, 2);
    }

    #[test]
    fn search_rejects_bad_arguments() {
        let mut c = SearchController::default();
        assert!(matches!(c.search(" x ", 1), Err(MovieSeekError::QueryTooShort(q)) if q == "x"));
        assert!(matches!(c.search("batman", 0), Err(MovieSeekError::InvalidPage)));
        assert_eq!(c.state(), &SearchState::default());
    }

    #[test]
    fn page_is_clamped_to_reported_total() {
        let mut c = SearchController::default();
        let req = fetched(&c.search("batman", 5).unwrap()).pop().unwrap();
        succeed(&mut c, &req, 23);
        assert_eq!(c.state().page, 3);
    }

    #[test]
    fn reply_after_clear_is_dropped() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        c.on_input_changed("");
        assert!(succeed(&mut c, &req, 23).is_empty());
        assert_eq!(c.state().total_results, 0);
    }

    #[test]
    fn shrinking_to_one_char_cancels_pending_search() {
        let mut c = SearchController::default();
        c.on_input_changed("ab");
        assert!(c.on_input_changed("a").is_empty());

        assert!(fetched(&c.on_debounce_elapsed().unwrap()).is_empty());
        assert!(!c.is_loading());
        assert_eq!(c.state(), &SearchState::default());
    }

    #[test]
    fn shrinking_to_one_char_keeps_committed_results() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 23);

        c.on_input_changed("b");
        assert_eq!(c.state().query, "batman");
        assert_eq!(c.state().total_results, 23);
    }

    #[test]
    fn new_query_replaces_state_wholesale() {
        let mut c = SearchController::default();
        let req = type_and_fire(&mut c, "batman");
        succeed(&mut c, &req, 23);

        c.go_to_next_page().unwrap();
        assert_eq!(c.state().page, 2);
        assert_eq!(c.state().total_results, 23);

        c.search("superman", 1).unwrap();
        assert_eq!(
            c.state(),
            &SearchState {
                query: "superman".to_string(),
                page: 1,
                total_results: 0,
            }
        );
    }
}

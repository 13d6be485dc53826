//! Search-and-pagination core.
//!
//! Pure state machine with no Zellij or HTTP dependencies:
//!
//! - [`controller`]: debounced input, paged queries, stale reply filtering
//! - [`debounce`]: cancel-and-replace timer bookkeeping
//! - [`pagination`]: page math for the fixed page size
//! - [`state`]: the committed query, page, and result count

pub mod controller;
pub mod debounce;
pub mod pagination;
pub mod state;

pub use controller::{
    Command, Notification, QueryOutcome, QueryRequest, RequestId, SearchController,
};
pub use debounce::Debouncer;
pub use pagination::{Pagination, PAGE_SIZE};
pub use state::{SearchState, MIN_QUERY_CHARS};

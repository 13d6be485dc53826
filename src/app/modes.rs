//! Input mode and view status types.
//!
//! These enums decide which keybindings are active and what the body of the
//! pane shows.
//!
//! # State Machine
//!
//! ```text
//!            Enter / Tab / Down (with results)
//!   Typing ───────────────────────────────────► Browsing
//!     ▲                                             │
//!     └──────────────── / or Esc ───────────────────┘
//! ```
//!
//! The details modal is layered on top of either mode and captures all keys
//! until closed.

use crate::domain::{ErrorKind, MovieDetails};

/// Which part of the UI receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Characters edit the search query.
    ///
    /// PageUp/PageDown page through results, Ctrl+n/p move the selection.
    #[default]
    Typing,

    /// The result list has focus.
    ///
    /// j/k move, h/l page, Enter opens details, `/` returns to typing.
    Browsing,
}

/// What the body of the pane is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchStatus {
    /// Nothing searched yet, or the input was cleared.
    #[default]
    Welcome,
    /// A request is in flight.
    Loading { query: String, page: u32 },
    /// A page of results is displayed.
    Results,
    /// The last lookup failed or found nothing.
    Problem(ErrorKind),
    /// Web access permission was refused.
    PermissionDenied,
}

/// State of the details modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailView {
    #[default]
    Closed,
    /// A details request for `title` is in flight.
    Loading { title: String },
    Open(MovieDetails),
    Failed(ErrorKind),
}

impl DetailView {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes key presses,
//! timer ticks, and web request replies, translating them into state changes
//! and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime (`main.rs`)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations happen through `AppState` and its `SearchController`
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `ClearInput`
//! - **Navigation**: `KeyDown`, `KeyUp`, `PreviousPage`, `NextPage`
//! - **Mode Switching**: `FocusResults`, `FocusSearchBar`, `OpenDetails`, `CloseModal`
//! - **Host**: `TimerElapsed`, `WebReply`, `PermissionsResult`
//!
//! # Example
//!
//! ```rust
//! use movieseek::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Char('b'))?;
//! assert!(actions.is_empty());
//! let (_, actions) = handle_event(&mut state, &Event::Char('a'))?;
//! assert!(matches!(actions[..], [Action::ScheduleTimer(_)]));
//! # Ok::<(), movieseek::MovieSeekError>(())
//! ```

use crate::api::{classify_search, HttpReply, RequestKind, RequestTag};
use crate::app::modes::{InputMode, SearchStatus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::Command;

/// Events triggered by user input or the plugin host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Empties the search query.
    ClearInput,

    /// Moves the selection down one row (wraps to top).
    KeyDown,
    /// Moves the selection up one row (wraps to bottom).
    KeyUp,
    /// Requests the previous page of results.
    PreviousPage,
    /// Requests the next page of results.
    NextPage,

    /// Moves focus from the search box to the result list.
    FocusResults,
    /// Moves focus back to the search box.
    FocusSearchBar,
    /// Opens the details modal for the selected row.
    OpenDetails,
    /// Closes the details modal.
    CloseModal,
    /// Hides the plugin pane.
    CloseFocus,

    /// A host timer set by `Action::ScheduleTimer` expired.
    TimerElapsed,

    /// A web request issued by `Action::WebRequest` completed.
    WebReply {
        /// Tag the request was issued with.
        tag: RequestTag,
        reply: HttpReply,
    },

    /// Outcome of the web access permission request.
    PermissionsResult {
        granted: bool,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the UI changed, and the side effects to
/// perform in order.
///
/// # Errors
///
/// Returns errors from search controller operations. None are expected in
/// practice: the controller only searches queries it has already validated.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.details.is_open() && is_blocked_by_modal(event) {
        tracing::trace!("details modal open, ignoring event");
        return Ok((false, vec![]));
    }

    match event {
        Event::Char(c) => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            state.query_input.push(*c);
            tracing::trace!(query = %state.query_input, char = %c, "search query updated");
            Ok(input_changed(state))
        }
        Event::Backspace => {
            if state.input_mode != InputMode::Typing {
                return Ok((false, vec![]));
            }
            if state.query_input.pop().is_none() {
                return Ok((false, vec![]));
            }
            Ok(input_changed(state))
        }
        Event::ClearInput => {
            if state.query_input.is_empty() {
                return Ok((false, vec![]));
            }
            state.query_input.clear();
            state.input_mode = InputMode::Typing;
            Ok(input_changed(state))
        }
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::PreviousPage => {
            let commands = state.controller.go_to_previous_page()?;
            Ok(paged(state, commands))
        }
        Event::NextPage => {
            let commands = state.controller.go_to_next_page()?;
            Ok(paged(state, commands))
        }
        Event::FocusResults => {
            if state.results.is_empty() {
                tracing::debug!("no results to focus");
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browsing;
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Typing;
            Ok((true, vec![]))
        }
        Event::OpenDetails => state.begin_details_lookup().map_or_else(
            || {
                tracing::debug!("no movie selected");
                Ok((false, vec![]))
            },
            |action| Ok((true, vec![action])),
        ),
        Event::CloseModal => {
            if !state.details.is_open() {
                return Ok((false, vec![]));
            }
            state.close_details();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::TimerElapsed => {
            let commands = state.controller.on_debounce_elapsed()?;
            if commands.is_empty() {
                return Ok((false, vec![]));
            }
            Ok((true, state.apply_commands(commands)))
        }
        Event::WebReply { tag, reply } => match tag.kind {
            RequestKind::Search => {
                let outcome = classify_search(reply);
                let commands = state.controller.on_query_resolved(tag.id, outcome);
                if commands.is_empty() {
                    return Ok((false, vec![]));
                }
                Ok((true, state.apply_commands(commands)))
            }
            RequestKind::Details => Ok((state.resolve_details(tag.id, reply), vec![])),
        },
        Event::PermissionsResult { granted } => {
            if *granted {
                tracing::debug!("web access granted");
                if state.status == SearchStatus::PermissionDenied {
                    state.status = SearchStatus::Welcome;
                    return Ok((true, vec![]));
                }
                Ok((false, vec![]))
            } else {
                tracing::warn!("web access denied - searches will fail");
                state.status = SearchStatus::PermissionDenied;
                Ok((true, vec![]))
            }
        }
    }
}

/// Feeds the current input buffer to the controller.
/// Editing and navigation events that must not reach the search box or the
/// result list while the details modal covers them.
const fn is_blocked_by_modal(event: &Event) -> bool {
    matches!(
        event,
        Event::Char(_)
            | Event::Backspace
            | Event::ClearInput
            | Event::KeyDown
            | Event::KeyUp
            | Event::PreviousPage
            | Event::NextPage
            | Event::FocusResults
            | Event::FocusSearchBar
            | Event::OpenDetails
    )
}

fn input_changed(state: &mut AppState) -> (bool, Vec<Action>) {
    let commands = state.controller.on_input_changed(&state.query_input);
    (true, state.apply_commands(commands))
}

/// Pager presses search immediately, bypassing the debounce.
fn paged(state: &mut AppState, commands: Vec<Command>) -> (bool, Vec<Action>) {
    if commands.is_empty() {
        tracing::debug!(page = state.controller.state().page, "page change ignored at boundary");
        return (false, vec![]);
    }
    (true, state.apply_commands(commands))
}

//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! plugin shim executes them in order through Zellij's host API. Keeping them
//! as plain data lets the whole application layer run in tests without a host.

use std::time::Duration;

use crate::api::RequestTag;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Sets a host timer; its expiry arrives as `Event::TimerElapsed`.
    ScheduleTimer(Duration),

    /// Issues an HTTP GET; the reply arrives as `Event::WebReply` carrying `tag`.
    WebRequest {
        /// Fully built request URL.
        url: String,
        /// Identifies the request when the reply comes back.
        tag: RequestTag,
    },
}

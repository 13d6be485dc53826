//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the search core.
//! It owns everything the pane displays and decides what the host should do
//! next.
//!
//! # Architecture
//!
//! ```text
//! Keys / Timer / WebRequestResult → Events → Event Handler → State Mutations → Actions
//!                  ↑                                                            │
//!                  └──────────── set_timeout / web_request ─────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Input mode, view status, and details modal state types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{DetailView, InputMode, SearchStatus};
pub use state::AppState;

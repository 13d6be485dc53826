//! Domain layer for the movieseek plugin.
//!
//! Core types independent of Zellij APIs and of the OMDb wire format.
//!
//! # Organization
//!
//! - [`error`]: Error types, lookup failure classification, result alias
//! - [`movie`]: Movie summaries, details, and ratings

pub mod error;
pub mod movie;

pub use error::{ErrorKind, MovieSeekError, Result};
pub use movie::{MediaKind, MovieDetails, MovieSummary, Rating};

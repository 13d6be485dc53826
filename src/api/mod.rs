//! OMDb HTTP JSON API integration.
//!
//! - [`omdb`]: request URLs and the context tags attached to web requests
//! - [`response`]: decoding replies and classifying them into outcomes
//!
//! Requests are performed by the plugin shim through Zellij's `web_request`;
//! nothing here does I/O.

pub mod omdb;
pub mod response;

pub use omdb::{OmdbClient, RequestKind, RequestTag, DEFAULT_API_KEY, DEFAULT_BASE_URL};
pub use response::{classify_details, classify_search, HttpReply};

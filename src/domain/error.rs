//! Error types for the movieseek plugin.
//!
//! Two layers of errors live here. [`MovieSeekError`] covers failures of the
//! plugin itself (an unusable base URL, unreadable theme files, invalid search
//! arguments) and is what the crate-wide [`Result`] alias carries. [`ErrorKind`]
//! is the classification of a failed lookup against the movie API; it never
//! propagates as an error value but is stored in state and turned into a
//! localized message by the UI layer.

use thiserror::Error;

/// The main error type for movieseek plugin operations.
///
/// # Examples
///
/// ```
/// use movieseek::domain::MovieSeekError;
///
/// let err = MovieSeekError::QueryTooShort("a".to_string());
/// assert_eq!(err.to_string(), "query \"a\" is shorter than the minimum search length");
/// ```
#[derive(Debug, Error)]
pub enum MovieSeekError {
    /// Theme file could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// The API base URL could not be parsed.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A search was requested with a query shorter than the minimum length.
    ///
    /// Carries the offending (trimmed) query.
    #[error("query {0:?} is shorter than the minimum search length")]
    QueryTooShort(String),

    /// A search was requested for page 0.
    #[error("page numbers start at 1")]
    InvalidPage,
}

/// Classification of a failed movie lookup.
///
/// Selects the user-facing message without exposing transport internals.
/// Lookups are never retried: the user re-types the query or presses the
/// pager again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The request never produced an HTTP response (unreachable host, DNS
    /// failure, missing web access permission).
    #[error("network error: {reason}")]
    Network {
        /// Transport-level description of the failure.
        reason: String,
    },

    /// The API answered with a non-2xx status code.
    #[error("server error: HTTP {status}")]
    Server {
        /// HTTP status code returned by the API.
        status: u16,
    },

    /// The API answered successfully but reported no matches.
    #[error("no results: {reason}")]
    NoResults {
        /// The `Error` text reported by the API.
        reason: String,
    },

    /// The response body could not be understood.
    #[error("unexpected response: {reason}")]
    Unexpected {
        /// Decoder error or a description of the malformed field.
        reason: String,
    },

    /// A single-title details lookup failed or returned no data.
    #[error("details lookup failed: {reason}")]
    DetailLookup {
        /// Underlying failure description.
        reason: String,
    },
}

/// A specialized `Result` type for movieseek operations.
pub type Result<T> = std::result::Result<T, MovieSeekError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_mentions_status() {
        let kind = ErrorKind::Server { status: 503 };
        assert_eq!(kind.to_string(), "server error: HTTP 503");
    }

    #[test]
    fn network_and_server_errors_are_distinct() {
        let network = ErrorKind::Network {
            reason: "connection refused".to_string(),
        };
        let server = ErrorKind::Server { status: 500 };
        assert_ne!(network, server);
        assert_ne!(network.to_string(), server.to_string());
    }

    #[test]
    fn url_errors_convert() {
        let err: MovieSeekError = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, MovieSeekError::Url(_)));
    }

    #[test]
    fn every_crate_error_has_a_producer() {
        // Each variant is raised by theme loading, client setup, or search.
        let produced = [
            crate::ui::Theme::from_file("/nonexistent/movieseek-theme.toml").unwrap_err(),
            crate::api::OmdbClient::new("not a url", String::new()).unwrap_err(),
            crate::search::SearchController::default().search("a", 1).unwrap_err(),
            crate::search::SearchController::default().search("batman", 0).unwrap_err(),
        ];
        for err in &produced {
            match err {
                MovieSeekError::Theme(_)
                | MovieSeekError::Url(_)
                | MovieSeekError::QueryTooShort(_)
                | MovieSeekError::InvalidPage => {}
            }
        }
        assert!(matches!(produced[0], MovieSeekError::Theme(_)));
        assert!(matches!(produced[1], MovieSeekError::Url(_)));
        assert!(matches!(produced[2], MovieSeekError::QueryTooShort(_)));
        assert!(matches!(produced[3], MovieSeekError::InvalidPage));
    }
}

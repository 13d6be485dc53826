//! OMDb response decoding and outcome classification.
//!
//! OMDb answers every request with a JSON envelope whose `Response` field is
//! the string `"True"` or `"False"`. Search envelopes carry `Search` and a
//! string-encoded `totalResults`; detail envelopes carry the title's fields
//! directly. Failures carry an `Error` message.
//!
//! Classification order for search replies:
//!
//! 1. no HTTP response at all → [`ErrorKind::Network`]
//! 2. non-2xx status → [`ErrorKind::Server`]
//! 3. undecodable body or bad `totalResults` → [`ErrorKind::Unexpected`]
//! 4. `Response: "False"` → [`QueryOutcome::Empty`]
//! 5. `Response: "True"` → [`QueryOutcome::Success`]

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::error::ErrorKind;
use crate::domain::movie::{available, select_ratings};
use crate::domain::{MediaKind, MovieDetails, MovieSummary, Rating};
use crate::search::QueryOutcome;

/// Status Zellij reports when a web request failed before any response.
const HOST_TRANSPORT_FAILURE_STATUS: u16 = 400;

/// Result of a web request as seen by the plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpReply {
    /// The server answered.
    Received { status: u16, body: Vec<u8> },
    /// The request never reached a server.
    Unreachable { reason: String },
}

impl HttpReply {
    /// Interprets a Zellij `WebRequestResult`.
    ///
    /// Zellij does not distinguish transport failures from responses: it
    /// reports them as status 400 with no headers and the error text as body.
    /// A real server response always carries headers.
    #[must_use]
    pub fn from_host(status: u16, headers: &BTreeMap<String, String>, body: Vec<u8>) -> Self {
        if status == HOST_TRANSPORT_FAILURE_STATUS && headers.is_empty() {
            Self::Unreachable {
                reason: String::from_utf8_lossy(&body).trim().to_string(),
            }
        } else {
            Self::Received { status, body }
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Vec<SearchItem>,
    #[serde(rename = "totalResults")]
    total_results: Option<String>,
    #[serde(rename = "Error")]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SearchItem {
    title: String,
    #[serde(default)]
    year: String,
    #[serde(rename = "imdbID")]
    imdb_id: String,
    poster: Option<String>,
    #[serde(rename = "Type", default)]
    kind: String,
}

impl From<SearchItem> for MovieSummary {
    fn from(item: SearchItem) -> Self {
        Self {
            title: item.title,
            year: item.year,
            imdb_id: item.imdb_id,
            poster: available(item.poster),
            kind: MediaKind::parse(&item.kind),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DetailEnvelope {
    response: String,
    error: Option<String>,
    title: Option<String>,
    year: Option<String>,
    runtime: Option<String>,
    genre: Option<String>,
    director: Option<String>,
    actors: Option<String>,
    plot: Option<String>,
    poster: Option<String>,
    #[serde(rename = "Type")]
    kind: Option<String>,
    #[serde(default)]
    ratings: Vec<RatingItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RatingItem {
    #[serde(default)]
    source: String,
    #[serde(default)]
    value: String,
}

fn is_true(flag: &str) -> bool {
    flag.trim().eq_ignore_ascii_case("true")
}

/// Classifies the reply to a search request.
#[must_use]
pub fn classify_search(reply: &HttpReply) -> QueryOutcome {
    let body = match reply {
        HttpReply::Unreachable { reason } => {
            return QueryOutcome::Failure(ErrorKind::Network {
                reason: reason.clone(),
            });
        }
        HttpReply::Received { status, .. } if !(200..300).contains(status) => {
            return QueryOutcome::Failure(ErrorKind::Server { status: *status });
        }
        HttpReply::Received { body, .. } => body,
    };

    let envelope: SearchEnvelope = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            tracing::debug!(error = %e, body_len = body.len(), "undecodable search response");
            return QueryOutcome::Failure(ErrorKind::Unexpected {
                reason: e.to_string(),
            });
        }
    };

    if !is_true(&envelope.response) {
        return QueryOutcome::Empty {
            reason: envelope.error.unwrap_or_default(),
        };
    }

    let total_results = match envelope
        .total_results
        .as_deref()
        .map(|raw| raw.trim().parse::<u64>())
    {
        Some(Ok(total)) => total,
        Some(Err(e)) => {
            return QueryOutcome::Failure(ErrorKind::Unexpected {
                reason: format!("invalid totalResults: {e}"),
            });
        }
        None => {
            return QueryOutcome::Failure(ErrorKind::Unexpected {
                reason: "missing totalResults".to_string(),
            });
        }
    };

    QueryOutcome::Success {
        items: envelope.search.into_iter().map(MovieSummary::from).collect(),
        total_results,
    }
}

/// Classifies the reply to a details request.
///
/// # Errors
///
/// Every failure, including an API-reported `Response: "False"`, is
/// [`ErrorKind::DetailLookup`].
pub fn classify_details(reply: &HttpReply) -> std::result::Result<MovieDetails, ErrorKind> {
    let lookup_error = |reason: String| ErrorKind::DetailLookup { reason };

    let body = match reply {
        HttpReply::Unreachable { reason } => return Err(lookup_error(reason.clone())),
        HttpReply::Received { status, .. } if !(200..300).contains(status) => {
            return Err(lookup_error(format!("HTTP {status}")));
        }
        HttpReply::Received { body, .. } => body,
    };

    let envelope: DetailEnvelope =
        serde_json::from_slice(body).map_err(|e| lookup_error(e.to_string()))?;

    if !is_true(&envelope.response) {
        return Err(lookup_error(envelope.error.unwrap_or_default()));
    }

    let title = available(envelope.title)
        .ok_or_else(|| lookup_error("response has no title".to_string()))?;

    Ok(MovieDetails {
        title,
        year: envelope.year.unwrap_or_default(),
        kind: MediaKind::parse(envelope.kind.as_deref().unwrap_or_default()),
        runtime: available(envelope.runtime),
        genre: available(envelope.genre),
        director: available(envelope.director),
        actors: available(envelope.actors),
        plot: available(envelope.plot),
        poster: available(envelope.poster),
        ratings: select_ratings(envelope.ratings.into_iter().map(|r| Rating {
            source: r.source,
            value: r.value,
        })),
    })
}

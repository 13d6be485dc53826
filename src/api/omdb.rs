//! OMDb request construction and request tagging.
//!
//! Zellij's `web_request` reports completion through a single
//! `WebRequestResult` event, so every request carries a context map that
//! identifies what it was for. [`RequestTag`] is the typed form of that map.

use std::collections::BTreeMap;

use url::Url;

use crate::domain::error::Result;
use crate::search::RequestId;

/// Default OMDb endpoint.
pub const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Public demo key used when none is configured.
pub const DEFAULT_API_KEY: &str = "b70853b4";

const CONTEXT_KIND: &str = "kind";
const CONTEXT_REQUEST_ID: &str = "request_id";

/// Builds OMDb request URLs for one API key and endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OmdbClient {
    base_url: Url,
    api_key: String,
}

impl OmdbClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MovieSeekError::Url`] when `base_url` does not parse.
    ///
    /// # Example
    ///
    /// ```
    /// use movieseek::api::OmdbClient;
    ///
    /// let client = OmdbClient::new("https://www.omdbapi.com/", "key")?;
    /// assert_eq!(
    ///     client.search_url("the matrix", 2),
    ///     "https://www.omdbapi.com/?apikey=key&s=the+matrix&page=2"
    /// );
    /// # Ok::<(), movieseek::MovieSeekError>(())
    /// ```
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key: api_key.into(),
        })
    }

    /// `GET <base>?apikey=<key>&s=<query>&page=<page>`
    #[must_use]
    pub fn search_url(&self, query: &str, page: u32) -> String {
        self.url_with(&[("s", query), ("page", &page.to_string())])
    }

    /// `GET <base>?apikey=<key>&i=<imdb_id>&plot=full`
    #[must_use]
    pub fn details_url(&self, imdb_id: &str) -> String {
        self.url_with(&[("i", imdb_id), ("plot", "full")])
    }

    fn url_with(&self, params: &[(&str, &str)]) -> String {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        url.into()
    }
}

impl Default for OmdbClient {
    /// Client for the public endpoint with the demo key.
    ///
    /// # Panics
    ///
    /// Panics if [`DEFAULT_BASE_URL`] fails to parse (should never occur).
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_KEY)
            .expect("Built-in OMDb base URL should always parse")
    }
}

/// What a web request was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Details,
}

impl RequestKind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Details => "details",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "search" => Some(Self::Search),
            "details" => Some(Self::Details),
            _ => None,
        }
    }
}

/// Identifies the request a web response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    pub kind: RequestKind,
    pub id: RequestId,
}

impl RequestTag {
    #[must_use]
    pub const fn search(id: RequestId) -> Self {
        Self {
            kind: RequestKind::Search,
            id,
        }
    }

    #[must_use]
    pub const fn details(id: RequestId) -> Self {
        Self {
            kind: RequestKind::Details,
            id,
        }
    }

    /// Encodes the tag as a `web_request` context map.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_KIND.to_string(), self.kind.as_str().to_string()),
            (CONTEXT_REQUEST_ID.to_string(), self.id.to_string()),
        ])
    }

    /// Decodes a context map, `None` if it was not produced by [`Self::to_context`].
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        let kind = RequestKind::parse(context.get(CONTEXT_KIND)?)?;
        let id = context.get(CONTEXT_REQUEST_ID)?.parse().ok()?;
        Some(Self { kind, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_encodes_query() {
        let client = OmdbClient::default();
        assert_eq!(
            client.search_url("amélie & co", 1),
            "https://www.omdbapi.com/?apikey=b70853b4&s=am%C3%A9lie+%26+co&page=1"
        );
    }

    #[test]
    fn details_url_requests_full_plot() {
        let client = OmdbClient::new("http://localhost:8080/api", "secret").unwrap();
        assert_eq!(
            client.details_url("tt0372784"),
            "http://localhost:8080/api?apikey=secret&i=tt0372784&plot=full"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(OmdbClient::new("omdb without scheme", "key").is_err());
    }

    #[test]
    fn tag_survives_context_map() {
        let tag = RequestTag::details(42);
        assert_eq!(RequestTag::from_context(&tag.to_context()), Some(tag));
    }

    #[test]
    fn foreign_context_is_not_a_tag() {
        let mut context = BTreeMap::new();
        assert_eq!(RequestTag::from_context(&context), None);

        context.insert("kind".to_string(), "search".to_string());
        context.insert("request_id".to_string(), "not-a-number".to_string());
        assert_eq!(RequestTag::from_context(&context), None);
    }
}

//! Movie domain model.
//!
//! These are the plugin-side representations of OMDb records. They are
//! decoupled from the wire format in [`crate::api::response`] so the rest of the
//! crate never sees `"N/A"` placeholders or PascalCase field names.

/// Placeholder OMDb uses for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

/// Maximum number of ratings shown in the details view.
pub const MAX_RATINGS: usize = 3;

/// Kind of title as reported by the API's `Type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaKind {
    Movie,
    Series,
    Episode,
    Game,
    /// Any type the API reports that we have no translation for.
    Other(String),
}

impl MediaKind {
    /// Parses the API `Type` field, case-insensitively.
    ///
    /// # Example
    ///
    /// ```
    /// use movieseek::domain::MediaKind;
    ///
    /// assert_eq!(MediaKind::parse("Series"), MediaKind::Series);
    /// assert_eq!(MediaKind::parse("short"), MediaKind::Other("short".to_string()));
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "movie" => Self::Movie,
            "series" => Self::Series,
            "episode" => Self::Episode,
            "game" => Self::Game,
            _ => Self::Other(raw.to_string()),
        }
    }
}

/// One row of a search result page.
///
/// Passed through unmodified from the API to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieSummary {
    pub title: String,
    pub year: String,
    pub imdb_id: String,
    /// Poster URL, `None` when the API has no poster.
    pub poster: Option<String>,
    pub kind: MediaKind,
}

/// A single rating from one source (e.g. "Rotten Tomatoes").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rating {
    pub source: String,
    pub value: String,
}

/// Expanded record shown in the details modal.
///
/// Optional fields are `None` whenever the API sent `"N/A"` or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieDetails {
    pub title: String,
    pub year: String,
    pub kind: MediaKind,
    pub runtime: Option<String>,
    pub genre: Option<String>,
    pub director: Option<String>,
    pub actors: Option<String>,
    pub plot: Option<String>,
    pub poster: Option<String>,
    /// At most [`MAX_RATINGS`] entries, in API order.
    pub ratings: Vec<Rating>,
}

/// Normalizes an optional API field, mapping `"N/A"` and blanks to `None`.
///
/// # Example
///
/// ```
/// use movieseek::domain::movie::available;
///
/// assert_eq!(available(Some("Christopher Nolan".to_string())), Some("Christopher Nolan".to_string()));
/// assert_eq!(available(Some("N/A".to_string())), None);
/// assert_eq!(available(None), None);
/// ```
#[must_use]
pub fn available(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let trimmed = v.trim();
        !trimmed.is_empty() && trimmed != NOT_AVAILABLE
    })
}

/// Keeps the ratings worth showing: both source and value present, value not
/// `"N/A"`, capped at [`MAX_RATINGS`].
#[must_use]
pub fn select_ratings(ratings: impl IntoIterator<Item = Rating>) -> Vec<Rating> {
    ratings
        .into_iter()
        .filter(|r| !r.source.trim().is_empty() && available(Some(r.value.clone())).is_some())
        .take(MAX_RATINGS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(source: &str, value: &str) -> Rating {
        Rating {
            source: source.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn media_kind_is_case_insensitive() {
        assert_eq!(MediaKind::parse("MOVIE"), MediaKind::Movie);
        assert_eq!(MediaKind::parse("episode"), MediaKind::Episode);
        assert_eq!(MediaKind::parse("Game"), MediaKind::Game);
    }

    #[test]
    fn ratings_drop_unavailable_and_cap_at_three() {
        let selected = select_ratings(vec![
            rating("Internet Movie Database", "8.2/10"),
            rating("Rotten Tomatoes", "N/A"),
            rating("", "50%"),
            rating("Metacritic", "70/100"),
            rating("Letterboxd", "4.1/5"),
            rating("Somewhere Else", "9/10"),
        ]);

        assert_eq!(
            selected,
            vec![
                rating("Internet Movie Database", "8.2/10"),
                rating("Metacritic", "70/100"),
                rating("Letterboxd", "4.1/5"),
            ]
        );
    }

    #[test]
    fn blank_fields_are_unavailable() {
        assert_eq!(available(Some("   ".to_string())), None);
    }
}

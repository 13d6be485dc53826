//! User-facing message catalogs.
//!
//! Every string the UI shows goes through [`Catalog`], selected by the
//! `locale` configuration option. English is the default; Ukrainian is
//! available with `locale "uk"`.

use crate::domain::{ErrorKind, MediaKind};

/// Message the API sends when a search has no matches.
pub const API_NOT_FOUND: &str = "Movie not found!";

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Ukrainian,
}

impl Locale {
    /// Resolves a configured locale tag, falling back to English.
    ///
    /// Accepts language tags with region or encoding suffixes.
    ///
    /// # Example
    ///
    /// ```
    /// use movieseek::i18n::Locale;
    ///
    /// assert_eq!(Locale::resolve(Some("uk_UA.UTF-8")), Locale::Ukrainian);
    /// assert_eq!(Locale::resolve(Some("fr")), Locale::English);
    /// assert_eq!(Locale::resolve(None), Locale::English);
    /// ```
    #[must_use]
    pub fn resolve(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::default();
        };

        let language = tag
            .split(['-', '_', '.'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_lowercase();

        match language.as_str() {
            "uk" | "ua" => Self::Ukrainian,
            "en" => Self::English,
            other => {
                tracing::debug!(locale = %other, "unsupported locale, using English");
                Self::default()
            }
        }
    }
}

/// Headline and explanation shown in the message panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: String,
    pub body: String,
}

/// Localized strings for one [`Locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Catalog {
    locale: Locale,
}

impl Catalog {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Shown before the first search and after clearing the input.
    #[must_use]
    pub fn welcome(&self) -> Message {
        match self.locale {
            Locale::English => Message {
                title: "Start searching".to_string(),
                body: "Type a movie or series title to see results".to_string(),
            },
            Locale::Ukrainian => Message {
                title: "Розпочніть пошук".to_string(),
                body: "Введіть назву фільму або серіалу, щоб побачити результати".to_string(),
            },
        }
    }

    /// Shown when a search has no matches.
    ///
    /// The API's own "Movie not found!" text is replaced by a friendlier
    /// sentence; any other API message is shown as is.
    #[must_use]
    pub fn no_results(&self, reason: &str) -> Message {
        let body = if reason.is_empty() || reason == API_NOT_FOUND {
            match self.locale {
                Locale::English => "No movies found. Try a different query.".to_string(),
                Locale::Ukrainian => "Фільми не знайдено. Спробуйте інший запит.".to_string(),
            }
        } else {
            reason.to_string()
        };

        let title = match self.locale {
            Locale::English => "Nothing found",
            Locale::Ukrainian => "Нічого не знайдено",
        };

        Message {
            title: title.to_string(),
            body,
        }
    }

    /// Message for a failed lookup.
    #[must_use]
    pub fn error(&self, kind: &ErrorKind) -> Message {
        if let ErrorKind::NoResults { reason } = kind {
            return self.no_results(reason);
        }

        let body = match (self.locale, kind) {
            (Locale::English, ErrorKind::Network { .. }) => {
                "Network error. Check your internet connection.".to_string()
            }
            (Locale::Ukrainian, ErrorKind::Network { .. }) => {
                "Помилка мережі. Перевірте підключення до інтернету.".to_string()
            }
            (Locale::English, ErrorKind::Server { status }) => format!("Server error: HTTP {status}"),
            (Locale::Ukrainian, ErrorKind::Server { status }) => {
                format!("Помилка сервера: HTTP {status}")
            }
            (Locale::English, ErrorKind::Unexpected { .. }) => {
                "Could not talk to the server. Try again later.".to_string()
            }
            (Locale::Ukrainian, ErrorKind::Unexpected { .. }) => {
                "Помилка підключення до сервера. Спробуйте пізніше.".to_string()
            }
            (Locale::English, ErrorKind::DetailLookup { .. }) => {
                "Could not load movie details".to_string()
            }
            (Locale::Ukrainian, ErrorKind::DetailLookup { .. }) => {
                "Не вдалося завантажити деталі фільму".to_string()
            }
            (_, ErrorKind::NoResults { .. }) => String::new(),
        };

        let title = match self.locale {
            Locale::English => "Error",
            Locale::Ukrainian => "Помилка",
        };

        Message {
            title: title.to_string(),
            body,
        }
    }

    /// Shown when the user refused the web access permission.
    #[must_use]
    pub fn permission_denied(&self) -> Message {
        match self.locale {
            Locale::English => Message {
                title: "Web access denied".to_string(),
                body: "Grant the plugin web access to search OMDb".to_string(),
            },
            Locale::Ukrainian => Message {
                title: "Доступ до мережі заборонено".to_string(),
                body: "Надайте плагіну доступ до мережі для пошуку в OMDb".to_string(),
            },
        }
    }

    #[must_use]
    pub fn loading(&self, query: &str, page: u32) -> String {
        match self.locale {
            Locale::English => format!("Searching \"{query}\" (page {page})..."),
            Locale::Ukrainian => format!("Пошук \"{query}\" (сторінка {page})..."),
        }
    }

    #[must_use]
    pub fn details_loading(&self, title: &str) -> String {
        match self.locale {
            Locale::English => format!("Loading details for {title}..."),
            Locale::Ukrainian => format!("Завантаження деталей: {title}..."),
        }
    }

    #[must_use]
    pub fn page_label(&self, page: u32, total_pages: u32) -> String {
        match self.locale {
            Locale::English => format!("Page {page} of {total_pages}"),
            Locale::Ukrainian => format!("Сторінка {page} з {total_pages}"),
        }
    }

    #[must_use]
    pub fn header_title(&self, total_results: u64) -> String {
        match self.locale {
            Locale::English => format!(" Movie Search ({total_results}) "),
            Locale::Ukrainian => format!(" Пошук фільмів ({total_results}) "),
        }
    }

    #[must_use]
    pub const fn search_prompt(&self) -> &'static str {
        match self.locale {
            Locale::English => "Search",
            Locale::Ukrainian => "Пошук",
        }
    }

    /// Column headings for the results table: title, year, type.
    #[must_use]
    pub const fn columns(&self) -> (&'static str, &'static str, &'static str) {
        match self.locale {
            Locale::English => ("TITLE", "YEAR", "TYPE"),
            Locale::Ukrainian => ("НАЗВА", "РІК", "ТИП"),
        }
    }

    #[must_use]
    pub const fn director_label(&self) -> &'static str {
        match self.locale {
            Locale::English => "Director",
            Locale::Ukrainian => "Режисер",
        }
    }

    #[must_use]
    pub const fn actors_label(&self) -> &'static str {
        match self.locale {
            Locale::English => "Actors",
            Locale::Ukrainian => "Актори",
        }
    }

    #[must_use]
    pub const fn plot_label(&self) -> &'static str {
        match self.locale {
            Locale::English => "Plot",
            Locale::Ukrainian => "Опис",
        }
    }

    /// Localized name of a media type; unknown types pass through.
    #[must_use]
    pub fn media_kind(&self, kind: &MediaKind) -> String {
        let label = match (self.locale, kind) {
            (_, MediaKind::Other(raw)) => return raw.clone(),
            (Locale::English, MediaKind::Movie) => "Movie",
            (Locale::English, MediaKind::Series) => "Series",
            (Locale::English, MediaKind::Episode) => "Episode",
            (Locale::English, MediaKind::Game) => "Game",
            (Locale::Ukrainian, MediaKind::Movie) => "Фільм",
            (Locale::Ukrainian, MediaKind::Series) => "Серіал",
            (Locale::Ukrainian, MediaKind::Episode) => "Епізод",
            (Locale::Ukrainian, MediaKind::Game) => "Гра",
        };
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_not_found_is_replaced() {
        let uk = Catalog::new(Locale::Ukrainian);
        assert_eq!(
            uk.no_results(API_NOT_FOUND).body,
            "Фільми не знайдено. Спробуйте інший запит."
        );

        let en = Catalog::default();
        assert_eq!(en.no_results(API_NOT_FOUND).body, "No movies found. Try a different query.");
    }

    #[test]
    fn other_api_messages_pass_through() {
        let en = Catalog::default();
        assert_eq!(en.no_results("Too many results.").body, "Too many results.");
    }

    #[test]
    fn network_and_server_messages_differ() {
        let en = Catalog::default();
        let network = en.error(&ErrorKind::Network {
            reason: "refused".to_string(),
        });
        let server = en.error(&ErrorKind::Server { status: 502 });
        assert_ne!(network.body, server.body);
        assert!(server.body.contains("502"));
    }

    #[test]
    fn no_results_kind_uses_no_results_message() {
        let uk = Catalog::new(Locale::Ukrainian);
        let msg = uk.error(&ErrorKind::NoResults {
            reason: API_NOT_FOUND.to_string(),
        });
        assert_eq!(msg.title, "Нічого не знайдено");
    }

    #[test]
    fn media_kinds_translate() {
        let uk = Catalog::new(Locale::Ukrainian);
        assert_eq!(uk.media_kind(&MediaKind::Series), "Серіал");
        assert_eq!(uk.media_kind(&MediaKind::Other("short".to_string())), "short");
        assert_eq!(Catalog::default().media_kind(&MediaKind::Game), "Game");
    }

    #[test]
    fn page_label_matches_locale() {
        assert_eq!(Catalog::new(Locale::Ukrainian).page_label(2, 3), "Сторінка 2 з 3");
        assert_eq!(Catalog::default().page_label(2, 3), "Page 2 of 3");
    }

    #[test]
    fn locale_resolution() {
        assert_eq!(Locale::resolve(Some("UK")), Locale::Ukrainian);
        assert_eq!(Locale::resolve(Some("en-US")), Locale::English);
        assert_eq!(Locale::resolve(Some("")), Locale::English);
    }
}

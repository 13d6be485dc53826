//! Movieseek: a Zellij plugin for searching the OMDb movie database.
//!
//! Typing in the search box runs a debounced, paginated title search against
//! the OMDb API and lists the matches in a table. Any row can be opened to
//! show plot, cast, and ratings.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, timers, HTTP
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Search Core   │   │ OMDb API      │   │ UI Layer      │
//! │ (search/)     │   │ (api/)        │   │ (ui/)         │
//! │ - Debounce    │   │ - URLs        │   │ - Rendering   │
//! │ - Pagination  │   │ - Replies     │   │ - Theming     │
//! │ - Stale drops │   │ - Request tags│   │ - Components  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/), Messages (i18n)                  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`search`]: Host-independent search controller
//! - [`api`]: OMDb request building and reply classification
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Movie types and errors
//! - [`i18n`]: English and Ukrainian message catalogs
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: OpenTelemetry tracing to a local file
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/movieseek.wasm" {
//!         api_key "b70853b4"
//!         debounce_ms "500"
//!         locale "uk"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use movieseek::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for c in "batman".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//!
//! // The host fires the debounce timer; the search goes out.
//! let (_, actions) = handle_event(&mut state, &Event::TimerElapsed)?;
//! assert!(actions.iter().any(|a| matches!(a, Action::WebRequest { .. })));
//! # Ok::<(), movieseek::MovieSeekError>(())
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod i18n;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{MovieSeekError, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

use api::{OmdbClient, DEFAULT_API_KEY, DEFAULT_BASE_URL};
use i18n::{Catalog, Locale};
use search::SearchController;

/// Default quiet period after the last keystroke.
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/movieseek.wasm" {
///     api_key "0123abcd"
///     base_url "https://www.omdbapi.com/"
///     debounce_ms "300"
///     locale "en"
///     theme "catppuccin-latte"
///     theme_file "~/.config/movieseek/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// OMDb API key appended to every request.
    pub api_key: String,

    /// OMDb endpoint. Useful for pointing at a proxy or a local mock.
    pub base_url: String,

    /// Quiet period after the last keystroke before a search is sent.
    pub debounce_ms: u64,

    /// UI language tag (`en`, `uk`). Unknown tags fall back to English.
    pub locale: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` is the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            locale: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. A `debounce_ms` that is not a number
    /// keeps the default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use movieseek::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("debounce_ms".to_string(), "250".to_string());
    /// map.insert("locale".to_string(), "uk".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.debounce_ms, 250);
    /// assert_eq!(config.locale.as_deref(), Some("uk"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };
        let defaults = Self::default();

        let debounce_ms = get("debounce_ms").map_or(defaults.debounce_ms, |raw| {
            raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid debounce_ms, using default");
                defaults.debounce_ms
            })
        });

        Self {
            api_key: get("api_key").unwrap_or(defaults.api_key),
            base_url: get("base_url").unwrap_or(defaults.base_url),
            debounce_ms,
            locale: get("locale"),
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
        }
    }

    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Builds the initial application state from configuration.
///
/// Never fails: a theme that cannot be loaded or an unusable `base_url` is
/// logged and replaced by the built-in default.
///
/// # Example
///
/// ```rust
/// use movieseek::{initialize, Config, InputMode};
///
/// let state = initialize(&Config::default());
/// assert_eq!(state.input_mode, InputMode::Typing);
/// assert!(state.results.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(debounce_ms = config.debounce_ms, "initializing movieseek plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let client = OmdbClient::new(&config.base_url, config.api_key.clone()).unwrap_or_else(|e| {
        tracing::warn!(base_url = %config.base_url, error = %e, "invalid base_url, using default endpoint");
        OmdbClient::new(DEFAULT_BASE_URL, config.api_key.clone()).unwrap_or_default()
    });

    let catalog = Catalog::new(Locale::resolve(config.locale.as_deref()));

    AppState::new(SearchController::new(config.debounce()), client, catalog, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn all_keys_are_read() {
        let config = Config::from_zellij(&map(&[
            ("api_key", "abc123"),
            ("base_url", "http://localhost:8080/"),
            ("debounce_ms", "300"),
            ("locale", "uk"),
            ("theme", "catppuccin-latte"),
            ("theme_file", "~/theme.toml"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.api_key, "abc123");
        assert_eq!(config.base_url, "http://localhost:8080/");
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.locale.as_deref(), Some("uk"));
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.theme_file.as_deref(), Some("~/theme.toml"));
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[("debounce_ms", "soon"), ("api_key", "  ")]));
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert_eq!(config.api_key, DEFAULT_API_KEY);
    }

    #[test]
    fn initialize_survives_bad_theme_and_url() {
        let config = Config {
            base_url: "not a url".to_string(),
            theme_name: Some("neon".to_string()),
            locale: Some("uk".to_string()),
            ..Config::default()
        };
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-mocha");
        assert_eq!(state.catalog.locale(), Locale::Ukrainian);
        assert!(state
            .client
            .search_url("batman", 1)
            .starts_with(DEFAULT_BASE_URL));
    }
}

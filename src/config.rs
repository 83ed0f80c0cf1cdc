//! Build-time configuration.
//!
//! The web build has no process environment at runtime, so settings are baked in when the
//! crate is compiled:
//!
//! ```sh
//! CATALOG_API_URL=https://api.example.com CATALOG_LOG_LEVEL=debug dx serve
//! ```

use tracing::Level;

/// The API base URL the app was compiled against.
pub const API_URL_ENV: Option<&str> = std::option_env!("CATALOG_API_URL");

/// The log level the app was compiled with.
pub const LOG_LEVEL_ENV: Option<&str> = std::option_env!("CATALOG_LOG_LEVEL");

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the catalog API, without a trailing slash.
    pub api_url: String,
    pub log_level: Level,
}

impl AppConfig {
    /// Read the configuration baked into this build.
    pub fn from_build_env() -> Self {
        Self::from_values(API_URL_ENV, LOG_LEVEL_ENV)
    }

    /// Build a configuration from optional raw values, falling back to defaults for
    /// anything missing or unparseable.
    pub fn from_values(api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(|level| level.trim().parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        Self { api_url, log_level }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

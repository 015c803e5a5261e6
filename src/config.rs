//! Configuration management for the podcast digest.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` in the local data directory (`<data_local_dir>/podigest/.env`)
//! 3. `.env` in the working directory
//! 4. Built-in defaults (where applicable)
//!
//! Everything is read once into [`Settings`], which is then passed around
//! explicitly.

use std::{env, path::PathBuf, time::Duration};

use chrono_tz::Tz;

use crate::{
    error::{DigestError, Res},
    spotify::RetryPolicy,
    types::{Credentials, Show},
    utils,
};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_TIMEZONE: &str = "America/Chicago";
pub const DEFAULT_MARKET: &str = "US";
pub const DEFAULT_EPISODE_LIMIT: u32 = 5;

/// Shows scanned when `PODIGEST_SHOWS` is not set, in playlist order.
pub const DEFAULT_SHOWS: &[(&str, &str)] = &[
    ("4orGHEysjCAWvGEbHzeL9A", "SANS Internet Stormcenter's Daily"),
    ("44BcTpDWnfhcn02ADzs7iB", "WSJ What's News"),
    ("1xGSLDgVYxLybmXpui6wwo", "CNN 5 Things"),
    ("6BRSvIBNQnB68GuoXJRCnQ", "NPR News Now"),
];

/// Loads `.env` files into the process environment.
///
/// The file in the local data directory is read first, then `.env` in the
/// working directory. Missing files are fine: scheduled runs usually get
/// their secrets from the real environment.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/podigest/.env`
/// - macOS: `~/Library/Application Support/podigest/.env`
/// - Windows: `%LOCALAPPDATA%/podigest/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
///
/// # Example
///
/// ```
/// if let Err(e) = config::load_env().await {
///     warning!("Cannot load .env file. Err: {}", e);
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("podigest/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    load_env_files(&[path, PathBuf::from(".env")])
}

/// Loads the given `.env` files in order.
///
/// A variable keeps the first value it gets: real environment variables beat
/// every file and earlier files beat later ones. Files that do not exist are
/// skipped.
pub fn load_env_files(paths: &[PathBuf]) -> Result<(), String> {
    for path in paths {
        if let Err(e) = dotenv::from_path(path) {
            if !e.not_found() {
                return Err(format!("{}: {}", path.display(), e));
            }
        }
    }

    Ok(())
}

/// Everything one run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials: Credentials,
    pub playlist_id: String,
    pub api_url: String,
    pub token_url: String,
    pub timezone: Tz,
    pub market: String,
    pub episode_limit: u32,
    pub retry: RetryPolicy,
    pub shows: Vec<Show>,
    pub verbose: bool,
}

impl Settings {
    /// Reads the settings from the process environment.
    ///
    /// Call [`load_env`] first so `.env` values are visible.
    ///
    /// # Returns
    ///
    /// - `Ok(Settings)` - All required values present and optional ones valid
    /// - `Err(DigestError::MissingConfig)` - A required variable is unset or blank
    /// - `Err(DigestError::InvalidConfig)` - An optional variable cannot be used
    ///
    /// # Example
    ///
    /// ```
    /// let settings = match config::Settings::from_env() {
    ///     Ok(settings) => settings,
    ///     Err(e) => error!("Invalid configuration: {}", e),
    /// };
    /// ```
    pub fn from_env() -> Res<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Empty values count as
    /// unset.
    ///
    /// # Arguments
    ///
    /// * `lookup` - Returns the value of a variable name, `None` when unset
    ///
    /// # Required keys
    ///
    /// `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`, `SPOTIFY_REFRESH_TOKEN`,
    /// `SPOTIFY_PLAYLIST_ID`.
    ///
    /// # Optional keys
    ///
    /// - `SPOTIFY_API_URL` / `SPOTIFY_API_TOKEN_URL` - Endpoint overrides
    /// - `PODIGEST_TIMEZONE` - IANA zone for "today", default `America/Chicago`
    /// - `PODIGEST_MARKET` - Episode market, default `US`
    /// - `PODIGEST_EPISODE_LIMIT` - Batch size 1-50, default 5
    /// - `PODIGEST_MAX_ATTEMPTS` - Read attempts on 429, default 3
    /// - `PODIGEST_SHOWS` - `ID=Label,...` replacing the built-in list
    /// - `PODIGEST_VERBOSE` - `1`, `true` or `yes` for request-level output
    pub fn from_lookup<F>(lookup: F) -> Res<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(DigestError::MissingConfig(key));

        let credentials = Credentials {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
        };
        let playlist_id = required("SPOTIFY_PLAYLIST_ID")?;

        let api_url = get("SPOTIFY_API_URL")
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let token_url = get("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string());

        let timezone = utils::parse_timezone(
            &get("PODIGEST_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string()),
        )
        .map_err(|reason| DigestError::InvalidConfig {
            key: "PODIGEST_TIMEZONE",
            reason,
        })?;

        let market = get("PODIGEST_MARKET").unwrap_or_else(|| DEFAULT_MARKET.to_string());

        let episode_limit = match get("PODIGEST_EPISODE_LIMIT") {
            Some(v) => parse_in_range("PODIGEST_EPISODE_LIMIT", &v, 1, 50)?,
            None => DEFAULT_EPISODE_LIMIT,
        };

        let mut retry = RetryPolicy::default();
        if let Some(v) = get("PODIGEST_MAX_ATTEMPTS") {
            retry.max_attempts = parse_in_range("PODIGEST_MAX_ATTEMPTS", &v, 1, u32::MAX)?;
        }

        let shows = match get("PODIGEST_SHOWS") {
            Some(v) => utils::parse_show_list(&v).map_err(|reason| DigestError::InvalidConfig {
                key: "PODIGEST_SHOWS",
                reason,
            })?,
            None => default_shows(),
        };

        let verbose = get("PODIGEST_VERBOSE")
            .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            credentials,
            playlist_id,
            api_url,
            token_url,
            timezone,
            market,
            episode_limit,
            retry,
            shows,
            verbose,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(30)
    }
}

pub fn default_shows() -> Vec<Show> {
    DEFAULT_SHOWS
        .iter()
        .map(|(id, label)| Show::new(*id, *label))
        .collect()
}

fn parse_in_range(key: &'static str, value: &str, min: u32, max: u32) -> Res<u32> {
    let parsed = value
        .trim()
        .parse::<u32>()
        .map_err(|e| DigestError::InvalidConfig {
            key,
            reason: e.to_string(),
        })?;

    if parsed < min || parsed > max {
        return Err(DigestError::InvalidConfig {
            key,
            reason: format!("{} is outside {}..={}", parsed, min, max),
        });
    }

    Ok(parsed)
}

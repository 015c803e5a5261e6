use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Short-lived access credential. Held in memory for one run only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub scope: String,
    #[serde(default = "default_expires_in")]
    pub expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Client credentials and the long-lived refresh token they unlock.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub refresh_token: String,
}

/// A configured podcast.
///
/// `id` is authoritative. `name` and `publisher` are filled in from the API
/// for display and fall back to `label` when resolution fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: String,
    pub label: String,
    pub name: Option<String>,
    pub publisher: Option<String>,
}

impl Show {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            name: None,
            publisher: None,
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.label)
    }

    pub fn resolved(mut self, meta: ShowResponse) -> Self {
        self.name = Some(meta.name);
        self.publisher = meta.publisher;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShowResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub publisher: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub uri: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub release_date_precision: Option<String>,
}

impl Episode {
    /// Release date as a plain calendar date. `None` when absent or malformed.
    pub fn release_day(&self) -> Option<NaiveDate> {
        self.release_date.as_deref().and_then(utils::parse_release_date)
    }
}

/// Page of episodes as returned by `/shows/{id}/episodes`.
///
/// Spotify occasionally puts `null` in `items`, those entries are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpisodesResponse {
    #[serde(default)]
    pub items: Vec<Option<Episode>>,
}

impl EpisodesResponse {
    pub fn into_episodes(self) -> Vec<Episode> {
        self.items.into_iter().flatten().collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl CurrentUser {
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePlaylistResponse {
    #[serde(default)]
    pub snapshot_id: Option<String>,
}

#[derive(Tabled)]
pub struct ShowTableRow {
    pub id: String,
    pub name: String,
    pub publisher: String,
}

#[derive(Tabled)]
pub struct LineupTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub show: String,
    pub episode: String,
    pub released: String,
    pub uri: String,
}

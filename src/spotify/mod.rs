//! # Spotify Integration Module
//!
//! Thin client over the parts of the Spotify Web API a digest run touches.
//!
//! ```text
//! Orchestrator (cli::build)
//!          ↓
//! SpotifyClient (bearer token + base URL + shared reqwest::Client)
//!     ├── auth      POST /api/token            refresh_token grant
//!     ├── users     GET  /me
//!     ├── shows     GET  /shows/{id}, /shows/{id}/episodes
//!     └── playlist  GET  /playlists/{id}, PUT /playlists/{id}/tracks
//!          ↓
//! RateLimitedFetcher (every GET, bounded retry on 429)
//! ```
//!
//! ## Error handling
//!
//! - Token exchange failures are fatal and never retried.
//! - Reads retry on 429 only, waiting for `Retry-After` seconds (1 second if
//!   the header is missing), up to [`RetryPolicy::max_attempts`] attempts.
//! - Any other non-success status is surfaced immediately.
//! - The playlist replace is a single attempt.

pub mod auth;
pub mod client;
pub mod fetcher;
pub mod playlist;
pub mod shows;
pub mod users;

pub use client::SpotifyClient;
pub use fetcher::{RateLimitedFetcher, RetryPolicy};

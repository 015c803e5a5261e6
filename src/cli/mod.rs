//! # CLI Module
//!
//! User-facing commands. Each command receives the already loaded
//! [`crate::config::Settings`] and talks to Spotify through
//! [`crate::spotify::SpotifyClient`].
//!
//! - [`build`] - Full digest run: select the lineup and replace the playlist
//! - [`shows`] - List the configured shows with resolved names
//!
//! ## Usage
//!
//! ```bash
//! podigest build                      # refresh the playlist for today
//! podigest build --dry-run            # show what would be published
//! podigest build --date 2025-03-14    # select against another day
//! podigest shows                      # check the show list
//! ```

mod build;
mod shows;

pub use build::{BuildOptions, BuildReport, build, run};
pub use shows::{resolve_shows, shows};

//! Podcast Digest Library
//!
//! Refreshes a Spotify playlist with the most recent episode of each
//! configured podcast. A run authenticates once with a refresh token, scans
//! the configured shows in order, picks one episode per show and replaces the
//! playlist contents with the resulting lineup.
//!
//! # Modules
//!
//! - `cli` - Command implementations (`build`, `shows`)
//! - `config` - Environment loading and run settings
//! - `digest` - Episode selection and the two-pass lineup policy
//! - `error` - Crate error type
//! - `spotify` - Spotify Web API client with rate-limit aware reads
//! - `types` - Data structures and wire formats
//! - `utils` - Date and parsing helpers

use std::sync::atomic::{AtomicBool, Ordering};

pub mod cli;
pub mod config;
pub mod digest;
pub mod error;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{DigestError, Res};

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Enables the request-level output printed by [`debug!`].
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Scanning {} shows", shows.len());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark to stderr and exits
/// the program with status 1.
///
/// Only for fatal conditions. Code after this macro does not run.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a dimmed request-level message, only when verbose output is on.
#[macro_export]
macro_rules! debug {
  ($($arg:tt)*) => ({
    if $crate::is_verbose() {
      use colored::Colorize;
      println!("[{}] {}", "·".dimmed(), std::format!($($arg)*).dimmed());
    }
  })
}

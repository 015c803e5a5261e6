use std::fmt;

use chrono::NaiveDate;

use crate::types::Episode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Only an episode released on the reference date qualifies.
    Strict,
    /// The newest episode qualifies, whatever its date.
    Fallback,
}

impl SelectionMode {
    pub fn require_today(self) -> bool {
        matches!(self, SelectionMode::Strict)
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Strict => write!(f, "strict"),
            SelectionMode::Fallback => write!(f, "fallback"),
        }
    }
}

/// Picks the episode of one show to put in the lineup.
///
/// `candidates` must be newest first, as Spotify returns them.
///
/// - Strict: the first candidate whose release date equals `reference_date`.
///   Episodes without a parsable day-precision date never match. No match
///   means `None`, not the newest episode.
/// - Fallback: the first candidate, whatever its date.
///
/// An empty batch yields `None` in both modes.
pub fn select(
    candidates: &[Episode],
    reference_date: NaiveDate,
    mode: SelectionMode,
) -> Option<&Episode> {
    if mode.require_today() {
        candidates
            .iter()
            .find(|episode| episode.release_day() == Some(reference_date))
    } else {
        candidates.first()
    }
}

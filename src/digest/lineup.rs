use chrono::NaiveDate;

use crate::{
    digest::selector::{SelectionMode, select},
    error::{DigestError, Res},
    types::{Episode, LineupTableRow, Show},
};

/// Episodes fetched for one show during the current run.
#[derive(Debug, Clone)]
pub struct ShowBatch {
    pub show: Show,
    pub episodes: Vec<Episode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupEntry {
    pub show: Show,
    pub episode: Episode,
}

/// Ordered episodes to publish: at most one per show, in show order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lineup {
    pub mode: SelectionMode,
    pub entries: Vec<LineupEntry>,
}

impl Lineup {
    /// Runs one selection pass over every batch, keeping show order.
    ///
    /// Shows for which `mode` picks nothing are left out; the pass itself
    /// never fails.
    ///
    /// # Arguments
    ///
    /// * `batches` - Episodes per show, shows in playlist order
    /// * `reference_date` - Day a strict pass matches release dates against
    /// * `mode` - Which selection rule to apply to every show
    ///
    /// # Example
    ///
    /// ```
    /// let strict = Lineup::select_pass(&batches, today, SelectionMode::Strict);
    /// if strict.is_empty() {
    ///     warning!("Nothing released on {}", today);
    /// }
    /// ```
    pub fn select_pass(batches: &[ShowBatch], reference_date: NaiveDate, mode: SelectionMode) -> Self {
        let entries = batches
            .iter()
            .filter_map(|batch| {
                select(&batch.episodes, reference_date, mode).map(|episode| LineupEntry {
                    show: batch.show.clone(),
                    episode: episode.clone(),
                })
            })
            .collect();

        Self { mode, entries }
    }

    /// True when no show contributed an episode.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Payload of the playlist replace.
    ///
    /// # Returns
    ///
    /// Episode URIs in lineup order, one per selected show.
    pub fn uris(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.episode.uri.clone()).collect()
    }

    /// Rows for the summary table, numbered from 1.
    pub fn table_rows(&self) -> Vec<LineupTableRow> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| LineupTableRow {
                position: i + 1,
                show: entry.show.display_name().to_string(),
                episode: entry.episode.name.clone(),
                released: entry.episode.release_date.clone().unwrap_or_else(|| "-".to_string()),
                uri: entry.episode.uri.clone(),
            })
            .collect()
    }
}

/// Builds the lineup with the two-pass policy.
///
/// The strict pass runs over all shows first. Only when it selects nothing
/// for any show does the fallback pass run, again over all shows. If the
/// strict pass found at least one episode, shows without a same-day release
/// stay out of the lineup for this run.
///
/// # Errors
///
/// [`DigestError::NoEpisodes`] when both passes come back empty.
pub fn build_lineup(batches: &[ShowBatch], reference_date: NaiveDate) -> Res<Lineup> {
    let strict = Lineup::select_pass(batches, reference_date, SelectionMode::Strict);
    if !strict.is_empty() {
        return Ok(strict);
    }

    let fallback = Lineup::select_pass(batches, reference_date, SelectionMode::Fallback);
    if fallback.is_empty() {
        return Err(DigestError::NoEpisodes);
    }

    Ok(fallback)
}

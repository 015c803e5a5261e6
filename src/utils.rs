use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::types::Show;

/// Parses a Spotify `release_date` as a plain `YYYY-MM-DD` date.
///
/// Year or month precision values ("2024", "2024-03") and anything malformed
/// yield `None`.
pub fn parse_release_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Calendar date of `now` as observed in `tz`.
pub fn reference_date_at(now: DateTime<Utc>, tz: Tz) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Today in the given zone, independent of the machine's local zone.
pub fn reference_date(tz: Tz) -> NaiveDate {
    reference_date_at(Utc::now(), tz)
}

/// Resolves an optional `--date` override, falling back to today in `tz`
/// when absent or unparsable.
pub fn get_date_from_string(date: Option<String>, tz: Tz) -> NaiveDate {
    match date {
        Some(date_str) => {
            NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").unwrap_or_else(|_| reference_date(tz))
        }
        None => reference_date(tz),
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, String> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| format!("unknown time zone '{}'", name.trim()))
}

/// Parses a comma separated show list of `ID=Label` or bare `ID` entries.
///
/// Order is kept. A bare id uses the id itself as label.
pub fn parse_show_list(input: &str) -> Result<Vec<Show>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("show list cannot be empty".to_string());
    }

    let mut shows = Vec::new();
    for raw in trimmed.split(',') {
        let entry = raw.trim();
        if entry.is_empty() {
            return Err(format!("empty segment in show list: '{}'", input));
        }

        let (id, label) = match entry.split_once('=') {
            Some((id, label)) => (id.trim(), label.trim()),
            None => (entry, entry),
        };

        if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(format!("invalid show id '{}'", id));
        }

        let label = if label.is_empty() { id } else { label };
        shows.push(Show::new(id, label));
    }

    Ok(shows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn release_date_requires_day_precision() {
        assert_eq!(
            parse_release_date("2025-03-14"),
            NaiveDate::from_ymd_opt(2025, 3, 14)
        );
        assert_eq!(parse_release_date("2025-03"), None);
        assert_eq!(parse_release_date("2025"), None);
        assert_eq!(parse_release_date("not a date"), None);
        assert_eq!(parse_release_date(""), None);
    }

    #[test]
    fn reference_date_uses_zone_not_utc() {
        // 03:30 UTC is still the previous evening in Chicago.
        let now = Utc.with_ymd_and_hms(2025, 6, 10, 3, 30, 0).unwrap();
        let tz: Tz = "America/Chicago".parse().unwrap();
        assert_eq!(
            reference_date_at(now, tz),
            NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
        );
        assert_eq!(
            reference_date_at(now, chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()
        );
    }
}

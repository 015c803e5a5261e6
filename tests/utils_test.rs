use chrono::NaiveDate;
use chrono_tz::Tz;
use podigest::types::{Episode, EpisodesResponse, Show};
use podigest::utils::*;

#[test]
fn test_parse_show_list_valid_inputs() {
    let shows = parse_show_list("4orGHEysjCAWvGEbHzeL9A=SANS Daily, 6BRSvIBNQnB68GuoXJRCnQ").unwrap();
    assert_eq!(
        shows,
        vec![
            Show::new("4orGHEysjCAWvGEbHzeL9A", "SANS Daily"),
            Show::new("6BRSvIBNQnB68GuoXJRCnQ", "6BRSvIBNQnB68GuoXJRCnQ"),
        ]
    );

    // Empty label falls back to the id
    let shows = parse_show_list("abc123=").unwrap();
    assert_eq!(shows[0].label, "abc123");
}

#[test]
fn test_parse_show_list_invalid_inputs() {
    let result = parse_show_list("   ");
    assert!(result.unwrap_err().contains("cannot be empty"));

    let result = parse_show_list("abc,,def");
    assert!(result.unwrap_err().contains("empty segment"));

    let result = parse_show_list("spotify:show:abc=Label");
    assert!(result.unwrap_err().contains("invalid show id"));

    let result = parse_show_list("=Label");
    assert!(result.unwrap_err().contains("invalid show id"));
}

#[test]
fn test_parse_timezone() {
    let tz = parse_timezone("America/Chicago").unwrap();
    assert_eq!(tz, Tz::America__Chicago);

    let result = parse_timezone("Mars/Olympus_Mons");
    assert!(result.unwrap_err().contains("unknown time zone"));
}

#[test]
fn test_get_date_from_string() {
    let tz = Tz::America__Chicago;

    let valid_date = get_date_from_string(Some("2023-10-17".to_string()), tz);
    assert_eq!(valid_date, NaiveDate::from_ymd_opt(2023, 10, 17).unwrap());

    // None and garbage both fall back to today in the zone
    let today = reference_date(tz);
    let fallback = get_date_from_string(None, tz);
    let invalid = get_date_from_string(Some("invalid-date".to_string()), tz);
    // Allow for the test straddling midnight in Chicago
    assert!(fallback == today || fallback == today.succ_opt().unwrap());
    assert!(invalid == today || invalid == today.succ_opt().unwrap());
}

#[test]
fn test_episode_release_day() {
    let mut episode = Episode {
        id: "e1".to_string(),
        name: "Episode".to_string(),
        uri: "spotify:episode:e1".to_string(),
        release_date: Some("2025-03-14".to_string()),
        release_date_precision: Some("day".to_string()),
    };
    assert_eq!(episode.release_day(), NaiveDate::from_ymd_opt(2025, 3, 14));

    episode.release_date = Some("2025".to_string());
    assert_eq!(episode.release_day(), None);

    episode.release_date = None;
    assert_eq!(episode.release_day(), None);
}

#[test]
fn test_episodes_response_tolerates_nulls_and_missing_items() {
    let json = r#"{
        "items": [
            null,
            {"id": "e1", "name": "One", "uri": "spotify:episode:e1", "release_date": "2025-03-14", "extra": 1},
            {"id": "e2", "name": "Two", "uri": "spotify:episode:e2"}
        ]
    }"#;
    let episodes = serde_json::from_str::<EpisodesResponse>(json)
        .unwrap()
        .into_episodes();
    assert_eq!(episodes.len(), 2);
    assert_eq!(episodes[0].uri, "spotify:episode:e1");
    assert_eq!(episodes[1].release_date, None);

    let empty = serde_json::from_str::<EpisodesResponse>("{}").unwrap();
    assert!(empty.into_episodes().is_empty());
}

#[test]
fn test_show_display_name_falls_back_to_label() {
    let show = Show::new("abc", "Configured Label");
    assert_eq!(show.display_name(), "Configured Label");

    let resolved = show.resolved(podigest::types::ShowResponse {
        id: "abc".to_string(),
        name: "Real Name".to_string(),
        publisher: Some("Publisher".to_string()),
    });
    assert_eq!(resolved.display_name(), "Real Name");
    assert_eq!(resolved.id, "abc");
}

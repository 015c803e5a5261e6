use std::collections::HashMap;
use std::{env, fs, path::PathBuf};

use chrono_tz::Tz;
use podigest::DigestError;
use podigest::config::{DEFAULT_API_URL, DEFAULT_SHOWS, Settings, load_env_files};

fn base_env() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        ("SPOTIFY_CLIENT_ID", "client"),
        ("SPOTIFY_CLIENT_SECRET", "secret"),
        ("SPOTIFY_REFRESH_TOKEN", "refresh"),
        ("SPOTIFY_PLAYLIST_ID", "playlist"),
    ])
}

fn settings_from(env: &HashMap<&'static str, &'static str>) -> Result<Settings, DigestError> {
    Settings::from_lookup(|key| env.get(key).map(|v| v.to_string()))
}

#[test]
fn test_defaults() {
    let settings = settings_from(&base_env()).unwrap();

    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.timezone, Tz::America__Chicago);
    assert_eq!(settings.market, "US");
    assert_eq!(settings.episode_limit, 5);
    assert_eq!(settings.retry.max_attempts, 3);
    assert_eq!(settings.shows.len(), DEFAULT_SHOWS.len());
    assert_eq!(settings.shows[0].id, "4orGHEysjCAWvGEbHzeL9A");
    assert_eq!(settings.shows[3].label, "NPR News Now");
    assert!(!settings.verbose);
}

#[test]
fn test_missing_required_values() {
    for key in [
        "SPOTIFY_CLIENT_ID",
        "SPOTIFY_CLIENT_SECRET",
        "SPOTIFY_REFRESH_TOKEN",
        "SPOTIFY_PLAYLIST_ID",
    ] {
        let mut env = base_env();
        env.remove(key);
        match settings_from(&env) {
            Err(DigestError::MissingConfig(missing)) => assert_eq!(missing, key),
            other => panic!("expected MissingConfig for {}, got {:?}", key, other),
        }
    }

    // Blank counts as missing
    let mut env = base_env();
    env.insert("SPOTIFY_PLAYLIST_ID", "  ");
    assert!(matches!(
        settings_from(&env),
        Err(DigestError::MissingConfig("SPOTIFY_PLAYLIST_ID"))
    ));
}

#[test]
fn test_overrides() {
    let mut env = base_env();
    env.insert("SPOTIFY_API_URL", "http://localhost:9999/v1/");
    env.insert("PODIGEST_TIMEZONE", "Europe/Berlin");
    env.insert("PODIGEST_MARKET", "DE");
    env.insert("PODIGEST_EPISODE_LIMIT", "10");
    env.insert("PODIGEST_MAX_ATTEMPTS", "5");
    env.insert("PODIGEST_SHOWS", "aaa=First,bbb=Second");
    env.insert("PODIGEST_VERBOSE", "1");

    let settings = settings_from(&env).unwrap();
    assert_eq!(settings.api_url, "http://localhost:9999/v1");
    assert_eq!(settings.timezone, Tz::Europe__Berlin);
    assert_eq!(settings.market, "DE");
    assert_eq!(settings.episode_limit, 10);
    assert_eq!(settings.retry.max_attempts, 5);
    assert_eq!(
        settings.shows.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
        vec!["aaa", "bbb"]
    );
    assert!(settings.verbose);
}

#[test]
fn test_invalid_values() {
    let cases = [
        ("PODIGEST_TIMEZONE", "Nowhere/Special"),
        ("PODIGEST_EPISODE_LIMIT", "0"),
        ("PODIGEST_EPISODE_LIMIT", "51"),
        ("PODIGEST_EPISODE_LIMIT", "five"),
        ("PODIGEST_MAX_ATTEMPTS", "0"),
        ("PODIGEST_SHOWS", "a,,b"),
    ];

    for (key, value) in cases {
        let mut env = base_env();
        env.insert(key, value);
        match settings_from(&env) {
            Err(DigestError::InvalidConfig { key: k, .. }) => assert_eq!(k, key),
            other => panic!("expected InvalidConfig for {}={}, got {:?}", key, value, other),
        }
    }
}

#[test]
fn test_earlier_env_file_wins() {
    let dir = env::temp_dir().join(format!("podigest-env-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let data_dir_env = dir.join("data.env");
    let cwd_env = dir.join("cwd.env");
    fs::write(&data_dir_env, "PODIGEST_ORDER_CHECK=data\nPODIGEST_ONLY_IN_DATA=data\n").unwrap();
    fs::write(&cwd_env, "PODIGEST_ORDER_CHECK=cwd\nPODIGEST_ONLY_IN_CWD=cwd\n").unwrap();

    load_env_files(&[data_dir_env, cwd_env, PathBuf::from("/nonexistent/podigest/.env")]).unwrap();

    assert_eq!(env::var("PODIGEST_ORDER_CHECK").unwrap(), "data");
    assert_eq!(env::var("PODIGEST_ONLY_IN_DATA").unwrap(), "data");
    assert_eq!(env::var("PODIGEST_ONLY_IN_CWD").unwrap(), "cwd");

    fs::remove_dir_all(&dir).ok();
}

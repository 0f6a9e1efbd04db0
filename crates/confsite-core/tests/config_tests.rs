//! Config file loading tests

mod common;

use std::io::Write;

use chrono::{TimeZone, Utc};
use common::fixtures::{fixture_path, load_fixture};
use confsite_core::{
    ConfigError, RequiredFieldPolicy, SchedulePlanner, SessionKind, SiteConfig, ThemeExplorer,
};

#[test]
fn test_load_toml_fixture() {
    let config = SiteConfig::load(fixture_path("site.toml")).unwrap();

    assert_eq!(config.conference.name, "SymCon 2026");
    assert_eq!(
        config.conference.starts_at,
        Utc.with_ymd_and_hms(2026, 1, 10, 3, 30, 0).unwrap()
    );
    assert_eq!(config.conference.tick_interval().as_millis(), 500);
    assert_eq!(config.submission.required_fields, RequiredFieldPolicy::Enforce);
    assert_eq!(config.submission.abstract_word_limit, 250);
    assert_eq!(config.dates.len(), 2);
}

#[test]
fn test_fixture_text_matches_file_load() {
    let from_text = SiteConfig::from_toml(&load_fixture("site.toml")).unwrap();
    assert_eq!(from_text, SiteConfig::load(fixture_path("site.toml")).unwrap());
    // Sections the fixture leaves out keep the built-in content
    assert_eq!(from_text.registration.tiers.len(), 4);
}

#[test]
fn test_fixture_content_drives_components() {
    let config = SiteConfig::load(fixture_path("site.toml")).unwrap();

    let mut planner = SchedulePlanner::new(config.schedule);
    assert_eq!(planner.day_labels(), vec!["Tutorial Day"]);
    assert_eq!(planner.sessions()[0].speaker.as_deref(), Some("Dr. Emmy Noether"));
    assert_eq!(planner.sessions_of_kind(SessionKind::Break).count(), 1);
    assert!(planner.toggle_favorite("Gröbner Bases in Practice"));

    let mut explorer = ThemeExplorer::new(config.themes);
    assert_eq!(explorer.toggle("cas").map(|t| t.details.len()), Some(2));
}

#[test]
fn test_load_rejects_invalid_json() {
    let err = SiteConfig::load(fixture_path("broken.json")).unwrap_err();
    assert!(matches!(err, ConfigError::MissingField(ref f) if f == "conference.name"));
}

#[test]
fn test_load_missing_file() {
    let err = SiteConfig::load(fixture_path("does-not-exist.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_load_written_json() {
    let mut config = SiteConfig::default();
    config.conference.name = "Written".to_string();

    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(config.to_json().unwrap().as_bytes()).unwrap();

    let loaded = SiteConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_inverted_session() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    write!(
        file,
        r#"
[[schedule]]
label = "Day 1"

[[schedule.sessions]]
start = "11:00:00"
end = "10:00:00"
title = "Backwards"
kind = "panel"
location = "Hall B"
"#
    )
    .unwrap();

    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange(_)));
}

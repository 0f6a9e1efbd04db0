//! Test fixture loading utilities

use std::path::PathBuf;

use chrono::{DateTime, TimeZone, Utc};

/// Get the path to a fixture file
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Raw text of a config fixture
#[allow(dead_code)]
pub fn load_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read config fixture {}: {}", path.display(), e))
}

/// Opening instant of the fixture conference
#[allow(dead_code)]
pub fn opening() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 3, 30, 0).unwrap()
}

//! Configuration for confsite-core
//!
//! Conference timing, submission rules and the content behind the
//! schedule, theme, important-date and registration sections. Loadable from
//! TOML or JSON; every section falls back to the built-in conference content.
//!
//! `starts_at` takes an RFC 3339 string or, in TOML, a native offset
//! datetime.
//!
//! ```toml
//! [conference]
//! name = "ICETITSC-2025"
//! starts_at = 2025-03-15T09:00:00+05:30
//! tick_interval_ms = 1000
//!
//! [submission]
//! required_fields = "enforce"
//! abstract_word_limit = 300
//! ```

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::builtin;
use crate::dates::ImportantDate;
use crate::error::ConfigError;
use crate::registration::RegistrationConfig;
use crate::schedule::ScheduleDay;
use crate::themes::Theme;

/// Site-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub conference: ConferenceConfig,
    pub submission: SubmissionConfig,
    pub schedule: Vec<ScheduleDay>,
    pub themes: Vec<Theme>,
    pub dates: Vec<ImportantDate>,
    pub registration: RegistrationConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            conference: ConferenceConfig::default(),
            submission: SubmissionConfig::default(),
            schedule: builtin::schedule(),
            themes: builtin::themes(),
            dates: builtin::important_dates(),
            registration: RegistrationConfig::default(),
        }
    }
}

/// Conference identity and countdown timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceConfig {
    pub name: String,
    /// Countdown target
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub starts_at: DateTime<Utc>,
    /// Countdown refresh interval in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for ConferenceConfig {
    fn default() -> Self {
        Self {
            name: "ICETITSC-2025".to_string(),
            // 09:00 IST
            starts_at: NaiveDate::from_ymd_opt(2025, 3, 15)
                .and_then(|day| day.and_hms_opt(3, 30, 0))
                .map(|at| at.and_utc())
                .unwrap_or_default(),
            tick_interval_ms: 1000,
        }
    }
}

impl ConferenceConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Accepts an RFC 3339 string or a native TOML offset datetime
mod timestamp {
    use std::fmt;

    use chrono::{DateTime, Utc};
    use serde::de::{self, value::MapAccessDeserializer, Deserialize, MapAccess, Visitor};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = DateTime<Utc>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an RFC 3339 date and time with an offset")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            DateTime::parse_from_rfc3339(value)
                .map(|at| at.with_timezone(&Utc))
                .map_err(|e| E::custom(format!("invalid timestamp '{}': {}", value, e)))
        }

        // TOML hands native datetimes over as a single-entry map
        fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
            let native = toml::value::Datetime::deserialize(MapAccessDeserializer::new(map))?;
            self.visit_str(&native.to_string())
        }
    }
}

/// Whether required-field markers block moving to the next step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredFieldPolicy {
    /// Validation is reported but never blocks navigation
    #[default]
    Advisory,
    /// Steps with validation errors cannot be left forwards
    Enforce,
}

/// Submission wizard rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    pub required_fields: RequiredFieldPolicy,
    /// Abstracts above this many words get a warning
    pub abstract_word_limit: usize,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            required_fields: RequiredFieldPolicy::Advisory,
            abstract_word_limit: 300,
        }
    }
}

impl SiteConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and validate a config file; `.json` files are parsed as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_toml(&text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.conference.name.trim().is_empty() {
            return Err(ConfigError::MissingField("conference.name".to_string()));
        }

        if self.conference.tick_interval_ms == 0 {
            return Err(ConfigError::OutOfRange(
                "conference.tick_interval_ms must be positive".to_string(),
            ));
        }

        if self.submission.abstract_word_limit == 0 {
            return Err(ConfigError::OutOfRange(
                "submission.abstract_word_limit must be positive".to_string(),
            ));
        }

        let mut day_labels = HashSet::new();
        for day in &self.schedule {
            if day.label.trim().is_empty() {
                return Err(ConfigError::MissingField("schedule.label".to_string()));
            }
            if !day_labels.insert(day.label.as_str()) {
                return Err(ConfigError::Duplicate(format!("schedule day {}", day.label)));
            }
            for session in &day.sessions {
                if session.end < session.start {
                    return Err(ConfigError::OutOfRange(format!(
                        "session '{}' on {} ends before it starts",
                        session.title, day.label
                    )));
                }
            }
        }

        let mut theme_ids = HashSet::new();
        for theme in &self.themes {
            if !theme_ids.insert(theme.id.as_str()) {
                return Err(ConfigError::Duplicate(format!("theme {}", theme.id)));
            }
        }

        for date in &self.dates {
            if date.until.is_some_and(|until| until < date.date) {
                return Err(ConfigError::OutOfRange(format!(
                    "date '{}' ends before it starts",
                    date.title
                )));
            }
        }

        let mut tier_names = HashSet::new();
        for tier in &self.registration.tiers {
            if tier.name.trim().is_empty() {
                return Err(ConfigError::MissingField("registration.tiers.name".to_string()));
            }
            if !tier_names.insert(tier.name.to_lowercase()) {
                return Err(ConfigError::Duplicate(format!("registration tier {}", tier.name)));
            }
            if tier.early_bird.currency != tier.regular.currency {
                return Err(ConfigError::OutOfRange(format!(
                    "registration tier {} mixes currencies",
                    tier.name
                )));
            }
        }

        Ok(())
    }
}

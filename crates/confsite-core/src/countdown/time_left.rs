//! Remaining time until the countdown target

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: u64 = 24 * SECONDS_PER_HOUR;

/// Days/hours/minutes/seconds left before the target instant.
///
/// Always non-negative. Once the target has passed every field is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct TimeLeft {
    pub days: u64,
    /// 0-23
    pub hours: u32,
    /// 0-59
    pub minutes: u32,
    /// 0-59
    pub seconds: u32,
}

impl TimeLeft {
    pub const ZERO: TimeLeft = TimeLeft {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Time left from `now` until `target`, truncated to whole seconds.
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let delta = target.signed_duration_since(now).num_seconds();
        if delta <= 0 {
            return Self::ZERO;
        }
        Self::from_seconds(delta as u64)
    }

    /// Split a whole number of seconds into its fields
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECONDS_PER_DAY,
            hours: ((total / SECONDS_PER_HOUR) % 24) as u32,
            minutes: ((total / SECONDS_PER_MINUTE) % 60) as u32,
            seconds: (total % 60) as u32,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY
            + u64::from(self.hours) * SECONDS_PER_HOUR
            + u64::from(self.minutes) * SECONDS_PER_MINUTE
            + u64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl std::fmt::Display for TimeLeft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}d {:02}:{:02}:{:02}",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

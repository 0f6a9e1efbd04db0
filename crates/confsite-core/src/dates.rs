//! Important dates (deadlines, notifications, the conference itself)

use chrono::{Datelike, DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportantDate {
    pub title: String,
    pub date: NaiveDate,
    /// Last day, for multi-day entries
    #[serde(default)]
    pub until: Option<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl ImportantDate {
    pub fn last_day(&self) -> NaiveDate {
        self.until.unwrap_or(self.date)
    }

    /// Midnight UTC after the last day; usable as a countdown target
    pub fn closes_at(&self) -> DateTime<Utc> {
        let after = self
            .last_day()
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX);
        after.and_time(NaiveTime::MIN).and_utc()
    }

    /// "March 15-17, 2025" style label
    pub fn display_range(&self) -> String {
        match self.until {
            Some(until) if until != self.date => {
                if (until.year(), until.month()) == (self.date.year(), self.date.month()) {
                    format!("{}-{}", self.date.format("%B %-d"), until.format("%-d, %Y"))
                } else {
                    format!("{} - {}", self.date.format("%B %-d, %Y"), until.format("%B %-d, %Y"))
                }
            }
            _ => self.date.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Entries whose last day is today or later, earliest first
pub fn upcoming(dates: &[ImportantDate], now: DateTime<Utc>) -> Vec<&ImportantDate> {
    let today = now.date_naive();
    let mut pending: Vec<_> = dates.iter().filter(|d| d.last_day() >= today).collect();
    pending.sort_by_key(|d| d.date);
    pending
}

/// The earliest entry still to come
pub fn next_deadline(dates: &[ImportantDate], now: DateTime<Utc>) -> Option<&ImportantDate> {
    upcoming(dates, now).into_iter().next()
}

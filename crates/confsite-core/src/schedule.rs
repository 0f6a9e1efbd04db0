//! Conference programme with a day selector and favourite sessions

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Kind of programme slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Registration,
    Ceremony,
    Keynote,
    Break,
    Technical,
    Panel,
}

impl SessionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Registration => "Registration",
            SessionKind::Ceremony => "Ceremony",
            SessionKind::Keynote => "Keynote",
            SessionKind::Break => "Break",
            SessionKind::Technical => "Technical",
            SessionKind::Panel => "Panel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub title: String,
    pub kind: SessionKind,
    pub location: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Session {
    /// "09:00 - 09:30"
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub label: String,
    pub sessions: Vec<Session>,
}

/// Day selector plus a favourites list over a fixed programme.
///
/// Favourites are keyed by session title, so a title that recurs on several
/// days (e.g. "Coffee Break") is starred everywhere at once.
#[derive(Debug, Clone)]
pub struct SchedulePlanner {
    days: Vec<ScheduleDay>,
    selected: usize,
    favorites: Vec<String>,
}

impl SchedulePlanner {
    /// Planner with the first day selected
    pub fn new(days: Vec<ScheduleDay>) -> Self {
        Self {
            days,
            selected: 0,
            favorites: Vec::new(),
        }
    }

    pub fn day_labels(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.label.as_str()).collect()
    }

    /// Switch to the day with this label. Unknown labels are ignored.
    pub fn select_day(&mut self, label: &str) -> bool {
        match self.days.iter().position(|d| d.label == label) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                debug!(label, "Ignored selection of unknown day");
                false
            }
        }
    }

    pub fn selected_day(&self) -> Option<&ScheduleDay> {
        self.days.get(self.selected)
    }

    /// Sessions of the selected day
    pub fn sessions(&self) -> &[Session] {
        self.selected_day()
            .map(|d| d.sessions.as_slice())
            .unwrap_or(&[])
    }

    pub fn sessions_of_kind(&self, kind: SessionKind) -> impl Iterator<Item = &Session> {
        self.sessions().iter().filter(move |s| s.kind == kind)
    }

    /// Star or unstar a session. Returns whether it is starred afterwards;
    /// titles not in the programme are ignored.
    pub fn toggle_favorite(&mut self, title: &str) -> bool {
        if let Some(pos) = self.favorites.iter().position(|f| f == title) {
            self.favorites.remove(pos);
            return false;
        }
        let known = self
            .days
            .iter()
            .flat_map(|d| d.sessions.iter())
            .any(|s| s.title == title);
        if known {
            self.favorites.push(title.to_string());
        }
        known
    }

    pub fn is_favorite(&self, title: &str) -> bool {
        self.favorites.iter().any(|f| f == title)
    }

    /// Starred titles in the order they were starred
    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }
}

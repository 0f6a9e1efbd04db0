//! Confsite Core - interaction state for the conference website
//!
//! The page layout, styling and animation live in the presentation layer;
//! this crate owns the parts of the site that hold state:
//!
//! - **Countdown**: live days/hours/minutes/seconds until the conference opens
//! - **Submission**: four-step paper submission wizard with author editing
//! - **Schedule**: day selector and favourite sessions over the programme
//! - **Themes**: research-theme accordion (one card expanded at a time)
//! - **Dates**: important-date timeline and the next upcoming deadline
//! - **Registration**: registration categories with early-bird and regular fees
//! - **Config**: conference timing, submission rules and site content
//!
//! # Lifecycle
//!
//! ```text
//! SiteConfig ─┬─> CountdownEngine::start() ─> CountdownHandle (stop / drop)
//!             ├─> SubmissionWizard ─> SubmissionSink (on final step)
//!             ├─> SchedulePlanner
//!             └─> ThemeExplorer
//! ```

mod builtin;
pub mod clock;
pub mod config;
pub mod countdown;
pub mod dates;
pub mod error;
pub mod registration;
pub mod schedule;
pub mod submission;
pub mod themes;
pub mod track;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConferenceConfig, RequiredFieldPolicy, SiteConfig, SubmissionConfig};
pub use countdown::{CountdownEngine, CountdownHandle, CountdownTick, TimeLeft};
pub use dates::{next_deadline, upcoming, ImportantDate};
pub use error::{ConfigError, ConfsiteError, Result, SinkError, TrackParseError};
pub use registration::{Currency, Fee, RegistrationConfig, RegistrationTier};
pub use schedule::{SchedulePlanner, ScheduleDay, Session, SessionKind};
pub use submission::{
    Author, AuthorField, LoggingSink, MemorySink, StepOutcome, SubmissionDraft, SubmissionReceipt,
    SubmissionSink, SubmissionWizard, ValidationError, ValidationSeverity, WizardSnapshot,
    WizardStep,
};
pub use themes::{Theme, ThemeExplorer};
pub use track::Track;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// Returns the version of confsite-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

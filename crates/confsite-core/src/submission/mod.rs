//! Paper submission
//!
//! - [`SubmissionWizard`]: four-step form state machine
//! - [`SubmissionDraft`]: data captured so far, plus derived views
//! - [`validation`]: per-step required-field and format checks
//! - [`SubmissionSink`]: injected receiver of the finished draft

mod author;
mod draft;
mod sink;
mod step;
pub mod validation;
mod wizard;

pub use author::{Author, AuthorField};
pub use draft::{keyword_tags, word_count, ReviewSummary, SubmissionDraft};
pub use sink::{LoggingSink, MemorySink, SubmissionReceipt, SubmissionSink};
pub use step::WizardStep;
pub use validation::{ValidationError, ValidationSeverity};
pub use wizard::{StepOutcome, SubmissionWizard, WizardSnapshot};

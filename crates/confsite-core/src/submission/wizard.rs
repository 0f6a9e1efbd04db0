//! Four-step paper submission wizard
//!
//! Holds a [`SubmissionDraft`] and applies field edits and step navigation
//! coming from the presentation layer. No operation fails: out-of-range
//! indices and moves past either end are ignored.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::validation::{validate_step, ValidationError};
use super::{
    Author, AuthorField, LoggingSink, ReviewSummary, SubmissionDraft, SubmissionReceipt,
    SubmissionSink, WizardStep,
};
use crate::config::{RequiredFieldPolicy, SubmissionConfig};
use crate::track::Track;

/// Result of [`SubmissionWizard::next`]
#[derive(Clone, Debug, PartialEq)]
pub enum StepOutcome {
    /// Moved forward to this step
    Advanced(WizardStep),
    /// Required fields are missing and the policy enforces them
    Blocked(Vec<ValidationError>),
    /// The draft was handed to the sink
    Submitted(SubmissionReceipt),
    /// The sink refused the draft; the wizard stays on the review step
    SubmissionFailed(String),
    /// The draft was already submitted
    AlreadySubmitted,
}

/// Everything the presentation layer needs to render the wizard
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    pub draft: SubmissionDraft,
    pub step_title: String,
    pub step_number: u8,
    pub keyword_tags: Vec<String>,
    pub abstract_word_count: usize,
    pub abstract_word_limit: usize,
    pub progress: f64,
    pub can_go_back: bool,
    pub is_final_step: bool,
    /// Remove controls are offered for every author except the first
    pub removable_authors: Vec<usize>,
    pub review: ReviewSummary,
    pub submitted: Option<SubmissionReceipt>,
}

pub struct SubmissionWizard {
    draft: SubmissionDraft,
    config: SubmissionConfig,
    sink: Box<dyn SubmissionSink>,
    receipt: Option<SubmissionReceipt>,
}

impl std::fmt::Debug for SubmissionWizard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionWizard")
            .field("draft", &self.draft)
            .field("config", &self.config)
            .field("receipt", &self.receipt)
            .finish_non_exhaustive()
    }
}

impl Default for SubmissionWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionWizard {
    /// Wizard with default rules and a logging sink
    pub fn new() -> Self {
        Self::with_sink(SubmissionConfig::default(), LoggingSink::new())
    }

    pub fn with_sink(config: SubmissionConfig, sink: impl SubmissionSink + 'static) -> Self {
        Self {
            draft: SubmissionDraft::new(),
            config,
            sink: Box::new(sink),
            receipt: None,
        }
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.draft.current_step
    }

    pub fn authors(&self) -> &[Author] {
        &self.draft.authors
    }

    pub fn receipt(&self) -> Option<&SubmissionReceipt> {
        self.receipt.as_ref()
    }

    // ===== Paper details =====

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_track(&mut self, track: Track) {
        self.draft.track = Some(track);
    }

    pub fn clear_track(&mut self) {
        self.draft.track = None;
    }

    pub fn set_abstract(&mut self, text: impl Into<String>) {
        self.draft.abstract_text = text.into();
    }

    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.draft.keywords = keywords.into();
    }

    // ===== Authors =====

    /// Append an empty author row
    pub fn add_author(&mut self) {
        self.draft.authors.push(Author::default());
        debug!(count = self.draft.authors.len(), "Added author");
    }

    /// Remove the author at `index`.
    ///
    /// The first author can never be removed, so the list is never empty.
    /// Returns whether anything was removed.
    pub fn remove_author(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.draft.authors.len() {
            debug!(index, "Ignored author removal");
            return false;
        }
        self.draft.authors.remove(index);
        debug!(index, count = self.draft.authors.len(), "Removed author");
        true
    }

    /// Replace one field of the author at `index`. Returns false when out of range.
    pub fn update_author(&mut self, index: usize, field: AuthorField, value: impl Into<String>) -> bool {
        match self.draft.authors.get_mut(index) {
            Some(author) => {
                author.set(field, value.into());
                true
            }
            None => {
                debug!(index, field = field.key(), "Ignored update of missing author");
                false
            }
        }
    }

    pub fn set_author_name(&mut self, index: usize, name: impl Into<String>) -> bool {
        self.update_author(index, AuthorField::Name, name)
    }

    pub fn set_author_email(&mut self, index: usize, email: impl Into<String>) -> bool {
        self.update_author(index, AuthorField::Email, email)
    }

    pub fn set_author_affiliation(&mut self, index: usize, affiliation: impl Into<String>) -> bool {
        self.update_author(index, AuthorField::Affiliation, affiliation)
    }

    // ===== Navigation =====

    /// Move forward one step, or submit from the review step
    pub fn next(&mut self) -> StepOutcome {
        let step = self.draft.current_step;

        if self.config.required_fields == RequiredFieldPolicy::Enforce {
            let blocking: Vec<_> = self
                .validate_current_step()
                .into_iter()
                .filter(ValidationError::is_error)
                .collect();
            if !blocking.is_empty() {
                debug!(step = %step, errors = blocking.len(), "Step blocked by validation");
                return StepOutcome::Blocked(blocking);
            }
        }

        match step.next() {
            Some(next) => {
                self.draft.current_step = next;
                debug!(from = %step, to = %next, "Advanced wizard");
                StepOutcome::Advanced(next)
            }
            None => self.submit(),
        }
    }

    /// Move back one step. Returns None on the first step.
    pub fn prev(&mut self) -> Option<WizardStep> {
        let prev = self.draft.current_step.prev()?;
        debug!(from = %self.draft.current_step, to = %prev, "Moved wizard back");
        self.draft.current_step = prev;
        Some(prev)
    }

    fn submit(&mut self) -> StepOutcome {
        if self.receipt.is_some() {
            return StepOutcome::AlreadySubmitted;
        }
        match self.sink.submit(&self.draft) {
            Ok(receipt) => {
                self.receipt = Some(receipt.clone());
                StepOutcome::Submitted(receipt)
            }
            Err(e) => {
                warn!(draft_id = %self.draft.id, "Submission failed: {}", e);
                StepOutcome::SubmissionFailed(e.to_string())
            }
        }
    }

    // ===== Views =====

    pub fn validate_current_step(&self) -> Vec<ValidationError> {
        validate_step(&self.draft, self.draft.current_step, &self.config)
    }

    pub fn snapshot(&self) -> WizardSnapshot {
        let step = self.draft.current_step;
        WizardSnapshot {
            draft: self.draft.clone(),
            step_title: step.title().to_string(),
            step_number: step.number(),
            keyword_tags: self.draft.keyword_tags(),
            abstract_word_count: self.draft.abstract_word_count(),
            abstract_word_limit: self.config.abstract_word_limit,
            progress: self.draft.progress(),
            can_go_back: !step.is_first(),
            is_final_step: step.is_last(),
            removable_authors: (1..self.draft.authors.len()).collect(),
            review: self.draft.review_summary(),
            submitted: self.receipt.clone(),
        }
    }
}

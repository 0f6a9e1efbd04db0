//! Per-step validation for submission drafts

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{AuthorField, SubmissionDraft, WizardStep};
use crate::config::SubmissionConfig;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").unwrap();
}

/// Severity of a validation error
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum ValidationSeverity {
    Error,
    Warning,
    Info,
}

/// A validation error or warning
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ValidationError {
    /// Field key; author fields are written `authors[i].name`
    pub field: String,
    pub message: String,
    pub severity: ValidationSeverity,
}

impl ValidationError {
    fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Error,
        }
    }

    fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity: ValidationSeverity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self.severity, ValidationSeverity::Error)
    }
}

/// Validate the fields captured by `step`.
///
/// The review step checks everything captured before it.
pub fn validate_step(
    draft: &SubmissionDraft,
    step: WizardStep,
    rules: &SubmissionConfig,
) -> Vec<ValidationError> {
    match step {
        WizardStep::PaperDetails => validate_paper_details(draft, rules),
        WizardStep::Authors => validate_authors(draft),
        WizardStep::Upload => Vec::new(),
        WizardStep::Review => {
            let mut errors = validate_paper_details(draft, rules);
            errors.extend(validate_authors(draft));
            errors
        }
    }
}

/// Check if the step has no blocking errors
pub fn is_step_valid(draft: &SubmissionDraft, step: WizardStep, rules: &SubmissionConfig) -> bool {
    validate_step(draft, step, rules)
        .iter()
        .all(|e| !e.is_error())
}

/// Loose `local@domain.tld` shape check
pub fn is_plausible_email(email: &str) -> bool {
    EMAIL.is_match(email.trim())
}

fn validate_paper_details(draft: &SubmissionDraft, rules: &SubmissionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(ValidationError::error("title", "Paper title is required"));
    }

    if draft.track.is_none() {
        errors.push(ValidationError::error("track", "Conference track is required"));
    }

    let words = draft.abstract_word_count();
    if words == 0 {
        errors.push(ValidationError::error("abstract", "Abstract is required"));
    } else if words > rules.abstract_word_limit {
        errors.push(ValidationError::warning(
            "abstract",
            format!(
                "Abstract has {} words, limit is {}",
                words, rules.abstract_word_limit
            ),
        ));
    }

    if draft.keyword_tags().is_empty() {
        errors.push(ValidationError::error("keywords", "At least one keyword is required"));
    }

    errors
}

fn validate_authors(draft: &SubmissionDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, author) in draft.authors.iter().enumerate() {
        for field in AuthorField::ALL {
            if author.get(field).trim().is_empty() {
                errors.push(ValidationError::error(
                    format!("authors[{}].{}", i, field.key()),
                    format!("{} is required for author {}", field.label(), i + 1),
                ));
            }
        }

        if !author.email.trim().is_empty() && !is_plausible_email(&author.email) {
            errors.push(ValidationError::error(
                format!("authors[{}].email", i),
                format!("Email for author {} is malformed", i + 1),
            ));
        }
    }

    errors
}

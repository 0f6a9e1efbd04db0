//! In-progress paper submission

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::author::non_empty_or;
use super::{Author, WizardStep};
use crate::track::Track;

/// State of a paper submission across the wizard steps.
///
/// `authors` always holds at least one entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub id: Uuid,
    pub title: String,
    pub track: Option<Track>,
    pub abstract_text: String,
    /// Comma-separated, as typed
    pub keywords: String,
    pub authors: Vec<Author>,
    pub current_step: WizardStep,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionDraft {
    /// Fresh draft: one empty author, first step
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            track: None,
            abstract_text: String::new(),
            keywords: String::new(),
            authors: vec![Author::default()],
            current_step: WizardStep::PaperDetails,
        }
    }

    /// Trimmed, non-empty comma-separated keywords
    pub fn keyword_tags(&self) -> Vec<String> {
        keyword_tags(&self.keywords)
    }

    pub fn abstract_word_count(&self) -> usize {
        word_count(&self.abstract_text)
    }

    /// Fraction of the wizard reached, in (0, 1]
    pub fn progress(&self) -> f64 {
        f64::from(self.current_step.number()) / f64::from(WizardStep::COUNT)
    }

    /// Lines shown on the review step
    pub fn review_summary(&self) -> ReviewSummary {
        ReviewSummary {
            title: non_empty_or(&self.title, "Not provided").to_string(),
            track: self
                .track
                .map(|t| t.label().to_string())
                .unwrap_or_else(|| "Not selected".to_string()),
            keywords: non_empty_or(&self.keywords, "Not provided").to_string(),
            author_count: self.authors.len(),
            authors: self.authors.iter().map(Author::review_line).collect(),
        }
    }
}

/// Review-step rendering of a draft
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    pub title: String,
    pub track: String,
    pub keywords: String,
    pub author_count: usize,
    pub authors: Vec<String>,
}

/// Split on commas, trim each entry and drop the empty ones
pub fn keyword_tags(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft() {
        let draft = SubmissionDraft::new();
        assert_eq!(draft.authors.len(), 1);
        assert_eq!(draft.current_step, WizardStep::PaperDetails);
        assert!(draft.track.is_none());
    }

    #[test]
    fn test_keyword_tags() {
        assert_eq!(keyword_tags("ai, ml ,  , db"), vec!["ai", "ml", "db"]);
        assert!(keyword_tags("").is_empty());
        assert!(keyword_tags(" , ,").is_empty());
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
        assert_eq!(word_count("deep  learning\nfor\tcompilers"), 4);
    }

    #[test]
    fn test_progress() {
        let mut draft = SubmissionDraft::new();
        assert_eq!(draft.progress(), 0.25);
        draft.current_step = WizardStep::Review;
        assert_eq!(draft.progress(), 1.0);
    }

    #[test]
    fn test_review_summary_fallbacks() {
        let summary = SubmissionDraft::new().review_summary();
        assert_eq!(summary.title, "Not provided");
        assert_eq!(summary.track, "Not selected");
        assert_eq!(summary.keywords, "Not provided");
        assert_eq!(summary.author_count, 1);
        assert_eq!(summary.authors[0], "Name not provided - Affiliation not provided");
    }

    #[test]
    fn test_review_summary_filled() {
        let mut draft = SubmissionDraft::new();
        draft.title = "Symbolic Integration at Scale".to_string();
        draft.track = Some(Track::SymbolicComputation);
        draft.keywords = "cas, integration".to_string();
        let summary = draft.review_summary();
        assert_eq!(summary.title, "Symbolic Integration at Scale");
        assert_eq!(summary.track, "Symbolic Computation");
        assert_eq!(summary.keywords, "cas, integration");
    }
}

//! Hand-off point for completed submissions
//!
//! The wizard never talks to the network itself. On the final step it
//! passes the draft to whatever [`SubmissionSink`] it was built with.

use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::SubmissionDraft;
use crate::clock::{Clock, SystemClock};
use crate::error::SinkError;

/// Acknowledgement returned by a sink
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub draft_id: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    pub fn for_draft(draft: &SubmissionDraft, submitted_at: DateTime<Utc>) -> Self {
        Self {
            draft_id: draft.id,
            submitted_at,
        }
    }
}

/// Receiver of completed drafts
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, SinkError>;
}

/// Default sink: records the hand-off in the log and accepts it
#[derive(Clone)]
pub struct LoggingSink {
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for LoggingSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingSink").finish_non_exhaustive()
    }
}

impl Default for LoggingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingSink {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Stamp receipts from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }
}

impl SubmissionSink for LoggingSink {
    fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, SinkError> {
        let receipt = SubmissionReceipt::for_draft(draft, self.clock.now());
        info!(
            draft_id = %draft.id,
            title = %draft.title,
            authors = draft.authors.len(),
            submitted_at = %receipt.submitted_at,
            "Paper submitted"
        );
        Ok(receipt)
    }
}

/// Keeps every submitted draft in memory
#[derive(Clone)]
pub struct MemorySink {
    drafts: Arc<Mutex<Vec<SubmissionDraft>>>,
    clock: Arc<dyn Clock>,
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("drafts", &self.drafts)
            .finish_non_exhaustive()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySink {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Stamp receipts from the given clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            drafts: Arc::new(Mutex::new(Vec::new())),
            clock,
        }
    }

    /// Drafts received so far, oldest first
    pub fn submitted(&self) -> Vec<SubmissionDraft> {
        self.drafts
            .lock()
            .map(|d| d.clone())
            .unwrap_or_else(|e| e.into_inner().clone())
    }
}

impl SubmissionSink for MemorySink {
    fn submit(&self, draft: &SubmissionDraft) -> Result<SubmissionReceipt, SinkError> {
        let mut drafts = self
            .drafts
            .lock()
            .map_err(|e| SinkError::Unavailable(e.to_string()))?;
        drafts.push(draft.clone());
        Ok(SubmissionReceipt::for_draft(draft, self.clock.now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::TimeZone;

    #[test]
    fn test_memory_sink_collects() {
        let sink = MemorySink::new();
        let draft = SubmissionDraft::new();
        let receipt = sink.submit(&draft).unwrap();
        assert_eq!(receipt.draft_id, draft.id);

        let clone = sink.clone();
        assert_eq!(clone.submitted(), vec![draft]);
    }

    #[test]
    fn test_logging_sink_accepts() {
        let draft = SubmissionDraft::new();
        assert!(LoggingSink::new().submit(&draft).is_ok());
    }

    #[test]
    fn test_receipts_use_injected_clock() {
        let at = Utc.with_ymd_and_hms(2025, 1, 14, 18, 45, 0).unwrap();
        let clock = Arc::new(ManualClock::new(at));
        let draft = SubmissionDraft::new();

        let memory = MemorySink::with_clock(clock.clone());
        assert_eq!(memory.submit(&draft).unwrap().submitted_at, at);

        clock.advance(chrono::Duration::minutes(5));
        let logging = LoggingSink::with_clock(clock);
        assert_eq!(
            logging.submit(&draft).unwrap().submitted_at,
            at + chrono::Duration::minutes(5)
        );
    }
}

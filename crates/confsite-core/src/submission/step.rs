//! Wizard step sequence
//!
//! ```text
//! PaperDetails → Authors → Upload → Review
//! ```
//!
//! Movement is strictly one step at a time in either direction.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum WizardStep {
    /// Title, track, abstract, keywords
    PaperDetails,
    /// Author list editing
    Authors,
    /// Manuscript upload (placeholder)
    Upload,
    /// Final review and submit
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PaperDetails,
        WizardStep::Authors,
        WizardStep::Upload,
        WizardStep::Review,
    ];

    /// Number of steps in the wizard
    pub const COUNT: u8 = 4;

    /// 1-based position
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::PaperDetails => 1,
            WizardStep::Authors => 2,
            WizardStep::Upload => 3,
            WizardStep::Review => 4,
        }
    }

    pub fn from_number(number: u8) -> Option<WizardStep> {
        match number {
            1 => Some(WizardStep::PaperDetails),
            2 => Some(WizardStep::Authors),
            3 => Some(WizardStep::Upload),
            4 => Some(WizardStep::Review),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PaperDetails => "Paper Details",
            WizardStep::Authors => "Authors",
            WizardStep::Upload => "Upload",
            WizardStep::Review => "Review",
        }
    }

    /// The following step, or None on the last one
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, or None on the first one
    pub fn prev(&self) -> Option<WizardStep> {
        Self::from_number(self.number() - 1)
    }

    pub fn is_first(&self) -> bool {
        self.prev().is_none()
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::PaperDetails
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step {}: {}", self.number(), self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_round_trips() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(5), None);
    }

    #[test]
    fn test_linear_sequence() {
        assert_eq!(WizardStep::PaperDetails.next(), Some(WizardStep::Authors));
        assert_eq!(WizardStep::Upload.next(), Some(WizardStep::Review));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::Authors.prev(), Some(WizardStep::PaperDetails));
        assert_eq!(WizardStep::PaperDetails.prev(), None);
    }

    #[test]
    fn test_bounds() {
        assert!(WizardStep::PaperDetails.is_first());
        assert!(!WizardStep::PaperDetails.is_last());
        assert!(WizardStep::Review.is_last());
    }

    #[test]
    fn test_display() {
        assert_eq!(WizardStep::Upload.to_string(), "Step 3: Upload");
    }
}

//! Conference tracks a paper can be submitted to

use serde::{Deserialize, Serialize};

use crate::error::TrackParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    ArtificialIntelligence,
    SymbolicComputation,
    InformationTechnology,
    EmergingTechnologies,
    NetworksAndSecurity,
    SoftwareEngineering,
}

impl Track {
    pub const ALL: [Track; 6] = [
        Track::ArtificialIntelligence,
        Track::SymbolicComputation,
        Track::InformationTechnology,
        Track::EmergingTechnologies,
        Track::NetworksAndSecurity,
        Track::SoftwareEngineering,
    ];

    /// Stable identifier, as used in config files and serialized drafts
    pub fn id(&self) -> &'static str {
        match self {
            Track::ArtificialIntelligence => "artificial-intelligence",
            Track::SymbolicComputation => "symbolic-computation",
            Track::InformationTechnology => "information-technology",
            Track::EmergingTechnologies => "emerging-technologies",
            Track::NetworksAndSecurity => "networks-and-security",
            Track::SoftwareEngineering => "software-engineering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Track::ArtificialIntelligence => "Artificial Intelligence & Machine Learning",
            Track::SymbolicComputation => "Symbolic Computation",
            Track::InformationTechnology => "Information Technology",
            Track::EmergingTechnologies => "Emerging Technologies",
            Track::NetworksAndSecurity => "Computer Networks & Security",
            Track::SoftwareEngineering => "Software Engineering",
        }
    }
}

impl std::str::FromStr for Track {
    type Err = TrackParseError;

    /// Accepts either the identifier or the display label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Track::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(wanted) || t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackParseError(s.to_string()))
    }
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_by_id_and_label() {
        assert_eq!(
            "symbolic-computation".parse::<Track>(),
            Ok(Track::SymbolicComputation)
        );
        assert_eq!(
            "computer networks & security".parse::<Track>(),
            Ok(Track::NetworksAndSecurity)
        );
        assert_eq!(
            "  Software Engineering ".parse::<Track>(),
            Ok(Track::SoftwareEngineering)
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Astrology".parse::<Track>().unwrap_err();
        assert_eq!(err, TrackParseError("Astrology".to_string()));
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<_> = Track::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Track::ALL.len());
    }

    #[test]
    fn test_serde_uses_id() {
        let json = serde_json::to_string(&Track::ArtificialIntelligence).unwrap();
        assert_eq!(json, "\"artificial-intelligence\"");
    }
}

//! Error types for confsite-core

use thiserror::Error;

/// Result type alias for confsite operations
pub type Result<T> = std::result::Result<T, ConfsiteError>;

/// Main error type for confsite operations
#[derive(Error, Debug)]
pub enum ConfsiteError {
    /// Configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Unknown conference track
    #[error("Track error: {0}")]
    Track(#[from] TrackParseError),

    /// Submission hand-off errors
    #[error("Submission error: {0}")]
    Sink(#[from] SinkError),
}

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required field is missing or empty
    #[error("Missing field: {0}")]
    MissingField(String),

    /// Value is out of valid range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Two entries share an identifier that must be unique
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Config file could not be read
    #[error("IO error: {0}")]
    Io(String),

    /// Config text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A track identifier or label that matches none of the conference tracks
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown track: {0}")]
pub struct TrackParseError(pub String);

/// Errors raised by a submission sink
#[derive(Error, Debug, Clone)]
pub enum SinkError {
    /// The sink refused the draft
    #[error("Submission rejected: {0}")]
    Rejected(String),

    /// The sink could not be reached
    #[error("Submission sink unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_converts() {
        let err: ConfsiteError = ConfigError::MissingField("conference.name".to_string()).into();
        assert_eq!(err.to_string(), "Config error: Missing field: conference.name");
    }

    #[test]
    fn test_track_error_message() {
        let err: ConfsiteError = TrackParseError("Astrology".to_string()).into();
        assert_eq!(err.to_string(), "Track error: Unknown track: Astrology");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "site.toml");
        assert!(matches!(ConfigError::from(io), ConfigError::Io(_)));
    }
}

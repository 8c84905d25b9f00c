// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the workouts library.

use std::fmt;

/// Result type alias for workout analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Main error type for the workouts library.
///
/// Detection failures (low-confidence joints, missing person) are not errors:
/// they surface as [`crate::Tier::Undetected`] feedback. This type covers the
/// fallible outer surface only - frame sources, parsing, and configuration.
#[derive(Debug)]
pub enum AnalysisError {
    /// Error opening or reading a frame source.
    SourceError(String),
    /// Error parsing a pose frame record.
    ParseError(String),
    /// Invalid configuration provided.
    ConfigError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceError(msg) => write!(f, "Source error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::ConfigError(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError(err.to_string())
    }
}

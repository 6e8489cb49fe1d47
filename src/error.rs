//! Error types
//!
//! Game-over is not an error; it is reported as `sim::Outcome::GameOver`.
//! These cover contract violations by the caller and bad configuration.

use std::fmt;

/// Rejected calls into the engine or session driver
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// `advance` was called on a session that already reported game-over
    SessionTerminated { final_score: u64 },
    /// The session driver was ticked with no running session
    NotRunning,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SessionTerminated { final_score } => {
                write!(f, "session already ended with score {final_score}")
            }
            Self::NotRunning => write!(f, "no session is running"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Failures loading or validating `Settings`
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    Invalid { field: &'static str, reason: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings json: {e}"),
            Self::Invalid { field, reason } => write!(f, "invalid setting `{field}`: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

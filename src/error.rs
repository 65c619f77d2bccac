//! Error types for hwtrack

use thiserror::Error;

/// Main error type for the hwtrack application
#[derive(Debug, Error)]
pub enum HwtrackError {
    #[error("Invalid Index")]
    InvalidIndex,

    #[error("Invalid Date. Please try again.")]
    InvalidDate,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collection error: {0}")]
    Collection(#[from] serde_json::Error),
}

impl HwtrackError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HwtrackError::Config(_) => 2,
            _ => 1,
        }
    }

    /// Whether the menu loop reports this error and keeps running.
    ///
    /// Everything else (backend IO, collection corruption, configuration)
    /// aborts the process immediately.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            HwtrackError::InvalidIndex | HwtrackError::InvalidDate
        )
    }
}

/// Result type using HwtrackError
pub type Result<T> = std::result::Result<T, HwtrackError>;

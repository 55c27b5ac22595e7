//! Error types
//!
//! Store operations themselves are total: a missing key is reported as
//! `None` or `Kind::Unknown`, never as an error. Errors only come from
//! building a store or reading its options.

use thiserror::Error;

/// Error type for kindstore
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A construction-time dependency (such as an observer) failed to build
    #[error("store initialization failed: {reason}")]
    Initialization {
        /// What went wrong
        reason: String,
    },

    /// Options text could not be parsed
    #[error("invalid store options: {0}")]
    InvalidOptions(String),
}

impl Error {
    /// Build an initialization error from any displayable cause
    pub fn initialization(cause: impl std::fmt::Display) -> Self {
        Error::Initialization {
            reason: cause.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::InvalidOptions(e.to_string())
    }
}

/// Result alias used across kindstore crates
pub type Result<T> = std::result::Result<T, Error>;

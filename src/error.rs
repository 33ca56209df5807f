//! Error types for the finance report service
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Report Error Enum ==
/// Unified error type for the finance report service.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The upstream report API could not be reached
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    /// The upstream body was not a valid report
    #[error("Malformed report payload: {0}")]
    Decode(String),

    /// Internal error, e.g. the HTTP client could not be built
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for ReportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ReportError::Decode(err.to_string())
        } else {
            ReportError::Upstream(err.to_string())
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the finance report service.
pub type Result<T> = std::result::Result<T, ReportError>;

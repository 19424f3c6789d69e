//! Error types for jira-transit
//!
//! Defines the error enum covering all failure modes across the system.
//! Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Result type alias for jira-transit operations
pub type Result<T> = std::result::Result<T, TransitError>;

/// Error type for jira-transit operations
#[derive(Error, Debug)]
pub enum TransitError {
    /// Configuration errors (missing or malformed inputs)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Commit messages contained no issue keys
    #[error("Commit messages do not contain any issue keys")]
    NoIssueKeys,

    /// Issue not found
    #[error("Issue not found: {0}")]
    IssueNotFound(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Tracker API errors (non-success HTTP response)
    #[error("Integration error: {0}")]
    Integration(String),

    /// Accumulated per-issue classification errors, one per line
    #[error("{0}")]
    TransitionErrors(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

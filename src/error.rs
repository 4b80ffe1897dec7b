//! Error types for accessible-reader.
//!
//! This module defines the error types returned by reader-view and settings operations.

/// Error type for reader-view and settings operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No element qualified as the page's main content.
    #[error("Could not identify main content for reader view")]
    NoMainContent,

    /// A user-supplied CSS selector could not be parsed.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// Settings could not be read or written.
    #[error("Settings error: {0}")]
    Settings(String),

    /// I/O failure (CLI input/output).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Settings(err.to_string())
    }
}

/// Result type alias for reader-view operations.
pub type Result<T> = std::result::Result<T, Error>;

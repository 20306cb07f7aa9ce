//! Error types for page publishing.

use crate::error::ConfluenceError;

/// Error during page create or update.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Input rejected before any request was made.
    #[error("{0}")]
    Invalid(String),

    /// Confluence API error.
    #[error("Confluence API error: {0}")]
    Confluence(#[from] ConfluenceError),
}

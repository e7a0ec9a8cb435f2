//! # Document Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Document store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// No document under this key. Expected on reads and deletes.
    #[error("Document not found: {0}")]
    NotFound(String),

    /// The document changed underneath the write
    #[error("Document update conflict: {0}")]
    Conflict(String),

    #[error("Unexpected store response {status}: {body}")]
    Unexpected { status: u16, body: String },

    #[error("Store transport error: {0}")]
    Transport(String),

    #[error("Malformed stored document: {0}")]
    Decode(String),

    #[error("Invalid store configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether this is the expected "no such document" outcome
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            StoreError::Decode(e.to_string())
        } else {
            StoreError::Transport(e.to_string())
        }
    }
}

//! Registration transform errors

use thiserror::Error;

/// Result type for payload transformation
pub type TransformResult<T> = Result<T, TransformError>;

#[derive(Debug, Error)]
pub enum TransformError {
    /// `payload_type` names no known transformer
    #[error("Unsupported payload type: {0}")]
    UnsupportedPayloadType(String),

    /// The registration body is not shaped like a registration payload
    #[error("Invalid registration payload: {0}")]
    InvalidPayload(String),

    /// A raw language descriptor cannot be turned into a node
    #[error("Invalid {payload_type} descriptor for {id}: {reason}")]
    InvalidDescriptor {
        payload_type: &'static str,
        id: String,
        reason: String,
    },

    /// A required descriptor field holds only whitespace
    #[error("'{field}' must not be blank in {payload_type} descriptor for {id}")]
    BlankField {
        payload_type: &'static str,
        id: String,
        field: String,
    },

    #[error("Failed to encode node {id}: {reason}")]
    Encode { id: String, reason: String },
}

//! Registry errors

use thiserror::Error;

use crate::registration::TransformError;
use crate::schema::SchemaError;
use crate::store::StoreError;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Request body is not JSON at all
    #[error("Unparsable json")]
    UnparsableJson,

    /// Payload parsed but was rejected; carries every reason
    #[error("Invalid registration: {}", .0.join("; "))]
    Invalid(Vec<String>),

    /// Payload was accepted but could not be turned into nodes
    #[error(transparent)]
    Transform(TransformError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RegistryError {
    /// Whether the caller sent something wrong (as opposed to a service failure)
    pub fn is_client_error(&self) -> bool {
        matches!(self, RegistryError::UnparsableJson | RegistryError::Invalid(_))
    }

    /// Messages reported back to the caller
    pub fn messages(&self) -> Vec<String> {
        match self {
            RegistryError::Invalid(messages) => messages.clone(),
            other => vec![other.to_string()],
        }
    }
}

impl From<SchemaError> for RegistryError {
    fn from(e: SchemaError) -> Self {
        RegistryError::Invalid(e.into_violations())
    }
}

impl From<TransformError> for RegistryError {
    fn from(e: TransformError) -> Self {
        match e {
            // Only reachable when the configured schema is looser than the
            // transformers; still the caller's payload at fault
            TransformError::UnsupportedPayloadType(_)
            | TransformError::InvalidPayload(_)
            | TransformError::BlankField { .. } => {
                RegistryError::Invalid(vec![e.to_string()])
            }
            other => RegistryError::Transform(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_message() {
        let err = RegistryError::UnparsableJson;
        assert!(err.is_client_error());
        assert_eq!(err.messages(), vec!["Unparsable json".to_string()]);
    }

    #[test]
    fn test_unknown_payload_type_is_client_error() {
        let err: RegistryError = TransformError::UnsupportedPayloadType("kml".into()).into();
        assert!(err.is_client_error());
        assert_eq!(err.messages(), vec!["Unsupported payload type: kml".to_string()]);
    }

    #[test]
    fn test_blank_field_is_client_error() {
        let err: RegistryError = TransformError::BlankField {
            payload_type: "wms",
            id: "rcs.k.en".into(),
            field: "layer".into(),
        }
        .into();
        assert!(err.is_client_error());
        assert!(err.messages()[0].contains("'layer' must not be blank"));
    }

    #[test]
    fn test_descriptor_failure_is_service_error() {
        let err: RegistryError = TransformError::InvalidDescriptor {
            payload_type: "wms",
            id: "rcs.k.en".into(),
            reason: "missing field `layer`".into(),
        }
        .into();
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_store_failure_is_service_error() {
        let err: RegistryError = StoreError::Transport("connection refused".into()).into();
        assert!(!err.is_client_error());
        assert!(err.messages()[0].contains("connection refused"));
    }
}

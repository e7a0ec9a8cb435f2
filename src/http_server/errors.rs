//! HTTP error responses
//!
//! Every failure is answered with `{"errors": [...]}`:
//! - 400 for unparsable or rejected payloads
//! - 500 for store, transform and encoding failures

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::registry::RegistryError;
use crate::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errors: Vec<String>,
}

/// Reason attached to failed responses for the failure logging middleware
#[derive(Debug, Clone)]
pub struct FailureReason(pub String);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to encode response: {0}")]
    Encode(String),

    #[error("Not implemented")]
    NotImplemented,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Registry(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Registry(e) => e.messages(),
            other => vec![other.to_string()],
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        ApiError::Registry(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let reason = FailureReason(self.to_string());
        let mut response = (
            status,
            Json(ErrorResponse {
                errors: self.messages(),
            }),
        )
            .into_response();
        response.extensions_mut().insert(reason);
        response
    }
}

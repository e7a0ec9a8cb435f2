//! Registration HTTP Routes
//!
//! - `PUT /register/{key}`: create or replace, 201 with the key as body
//! - `DELETE /register/{key}`: remove, 204 whether or not it existed
//! - `GET /register/{key}`: not implemented, always 500

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};

use super::errors::ApiError;
use super::RegistryState;

/// Create registration routes
pub fn register_routes(state: Arc<RegistryState>) -> Router {
    Router::new()
        .route(
            "/register/:key",
            get(get_registration_handler)
                .put(put_registration_handler)
                .delete(delete_registration_handler),
        )
        .with_state(state)
}

async fn get_registration_handler(Path(_key): Path<String>) -> Result<StatusCode, ApiError> {
    Err(ApiError::NotImplemented)
}

async fn put_registration_handler(
    State(state): State<Arc<RegistryState>>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, String), ApiError> {
    state.registry.register(&key, &body).await?;
    Ok((StatusCode::CREATED, key))
}

async fn delete_registration_handler(
    State(state): State<Arc<RegistryState>>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.registry.unregister(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}

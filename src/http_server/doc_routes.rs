//! Document HTTP Routes
//!
//! - `GET /doc/{lang}/{key}`: one envelope, 404 when absent
//! - `GET /docs/{lang}/{keylist}`: array of envelopes (null for absent), JSONP capable

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use super::errors::ApiError;
use super::jsonp::{json_or_jsonp, JsonpQuery};
use super::RegistryState;
use crate::registry::parse_key_list;

/// Create document read routes
pub fn doc_routes(state: Arc<RegistryState>) -> Router {
    Router::new()
        .route("/doc/:lang/:key", get(get_doc_handler))
        .route("/docs/:lang/:keylist", get(get_docs_handler))
        .with_state(state)
}

async fn get_doc_handler(
    State(state): State<Arc<RegistryState>>,
    Path((lang, key)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let response = match state.registry.get_doc(&key, &lang).await? {
        Some(envelope) => Json(envelope).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    };
    Ok(response)
}

async fn get_docs_handler(
    State(state): State<Arc<RegistryState>>,
    Path((lang, keylist)): Path<(String, String)>,
    Query(query): Query<JsonpQuery>,
) -> Result<Response, ApiError> {
    let keys = parse_key_list(&keylist);
    let docs = state.registry.get_docs(&keys, &lang).await;

    let body = serde_json::to_vec(&docs).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(json_or_jsonp(body, &query))
}

//! JSONP response formatting

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

pub const JSON_MIME: &str = "application/json";
pub const JAVASCRIPT_MIME: &str = "application/javascript";

/// Query string of endpoints that support JSONP
#[derive(Debug, Default, Deserialize)]
pub struct JsonpQuery {
    #[serde(default)]
    pub callback: Option<String>,
}

impl JsonpQuery {
    /// Callback name, ignoring an empty `?callback=`
    pub fn callback(&self) -> Option<&str> {
        self.callback.as_deref().filter(|cb| !cb.is_empty())
    }
}

/// Wraps serialized JSON as `<callback>(<json>)`.
pub fn wrap_jsonp(json: &[u8], callback: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(callback.len() + json.len() + 2);
    out.extend_from_slice(callback.as_bytes());
    out.push(b'(');
    out.extend_from_slice(json);
    out.push(b')');
    out
}

/// 200 response carrying `json`, wrapped when a callback was requested.
pub fn json_or_jsonp(json: Vec<u8>, query: &JsonpQuery) -> Response {
    match query.callback() {
        Some(callback) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, JAVASCRIPT_MIME)],
            wrap_jsonp(&json, callback),
        )
            .into_response(),
        None => (StatusCode::OK, [(header::CONTENT_TYPE, JSON_MIME)], json).into_response(),
    }
}

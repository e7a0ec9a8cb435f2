//! Observability HTTP Routes
//!
//! Health check plus the failure logging middleware shared by every route.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::error;

use super::errors::FailureReason;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Request details recorded with a failure. Missing values are `-`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub method: Method,
    pub path: String,
    pub ip: String,
    pub agent: String,
}

impl RequestContext {
    pub fn from_request(request: &Request) -> Self {
        let ip = request
            .extensions()
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip().to_string())
            .unwrap_or_else(|| "-".to_string());
        let agent = request
            .headers()
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-")
            .to_string();

        Self {
            method: request.method().clone(),
            path: request.uri().path().to_string(),
            ip,
            agent,
        }
    }
}

/// Logs every server error with the request it answered.
pub async fn log_failures(request: Request, next: Next) -> Response {
    let context = RequestContext::from_request(&request);

    let response = next.run(request).await;

    if response.status().is_server_error() {
        let reason = response
            .extensions()
            .get::<FailureReason>()
            .map(|r| r.0.as_str())
            .unwrap_or("unhandled failure");
        error!(
            method = %context.method,
            path = %context.path,
            ip = %context.ip,
            agent = %context.agent,
            status = response.status().as_u16(),
            reason,
            "request failed"
        );
    }

    response
}

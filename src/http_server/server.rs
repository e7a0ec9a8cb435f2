//! # HTTP Server
//!
//! Combines the document, registration and health routers behind the shared
//! middleware stack.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::doc_routes::doc_routes;
use super::observability_routes::{health_routes, log_failures};
use super::register_routes::register_routes;
use super::RegistryState;
use crate::config::ServiceConfig;
use crate::registry::Registry;

/// HTTP server for the registration service
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server serving `registry` with the given configuration
    pub fn new(config: &ServiceConfig, registry: Registry) -> Self {
        Self {
            addr: config.socket_addr(),
            router: build_router(registry, &config.cors_origins),
        }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Start the HTTP server and run until ctrl-c
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = bind(&self.addr).await?;
        let addr = listener.local_addr()?;
        info!(%addr, host = %self.addr, "registration service listening");

        axum::serve(
            listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown_signal())
        .await
    }
}

/// Build the combined router with all endpoints
pub fn build_router(registry: Registry, cors_origins: &[String]) -> Router {
    let state = Arc::new(RegistryState { registry });

    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .merge(health_routes())
        .merge(doc_routes(state.clone()))
        .merge(register_routes(state))
        .layer(CatchPanicLayer::new())
        .layer(middleware::from_fn(log_failures))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Bind `host:port`, resolving host names.
async fn bind(addr: &str) -> Result<TcpListener, std::io::Error> {
    TcpListener::bind(addr).await.map_err(|e| {
        std::io::Error::new(e.kind(), format!("cannot bind '{}': {}", addr, e))
    })
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}

//! # Registration HTTP Server Module
//!
//! # Endpoints
//!
//! - `GET /doc/{lang}/{key}` - One registration, one language
//! - `GET /docs/{lang}/{keylist}` - Several registrations, JSONP capable
//! - `PUT|DELETE /register/{key}` - Create, replace or remove a registration
//! - `/health` - Health check

pub mod doc_routes;
pub mod errors;
pub mod jsonp;
pub mod observability_routes;
pub mod register_routes;
pub mod server;

pub use errors::{ApiError, ErrorResponse};
pub use jsonp::wrap_jsonp;
pub use server::{build_router, HttpServer};

use crate::registry::Registry;

/// State shared across handlers
pub struct RegistryState {
    pub registry: Registry,
}

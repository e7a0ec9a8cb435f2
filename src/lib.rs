//! rcs - registration service for bilingual geographic layer documents
//!
//! Payloads describing a WMS layer or an ESRI feature service are validated
//! against a JSON Schema, turned into one node per language and stored in a
//! document database under a short key.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod observability;
pub mod registration;
pub mod registry;
pub mod schema;
pub mod store;

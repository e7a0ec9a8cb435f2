//! # Document Store Module
//!
//! Registration documents keyed by short key.
//!
//! ## Backends
//! - `CouchStore`: CouchDB over HTTP
//! - `MemoryStore`: in-process, for tests and local runs
//!
//! Not-found is an ordinary outcome here (`StoreError::NotFound`); callers
//! decide whether it matters.

pub mod backend;
pub mod couch;
pub mod document;
pub mod errors;
pub mod memory;

pub use backend::DocumentStore;
pub use couch::CouchStore;
pub use document::{DocumentData, StoredDocument};
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;

//! Registration registry
//!
//! The glue between the HTTP layer, the schema validator, the node
//! transformers and the document store.

mod envelope;
mod errors;
mod service;

pub use envelope::DocEnvelope;
pub use errors::{RegistryError, RegistryResult};
pub use service::{parse_key_list, Registry};

//! Registration payloads and their transformation into nodes
//!
//! A payload carries one raw descriptor per language. `payload_type` selects
//! the transformer, and each language becomes a [`Node`] tagged
//! `rcs.<key>.<lang>`.

mod errors;
mod key;
pub mod node;
mod payload;

pub use errors::{TransformError, TransformResult};
pub use key::{make_id, ID_NAMESPACE};
pub use node::Node;
pub use payload::{PayloadType, RegistrationPayload, TransformedRegistration};

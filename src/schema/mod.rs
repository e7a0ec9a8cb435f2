//! Registration schema validation
//!
//! Every `PUT /register/{key}` body is checked against a Draft-4 JSON Schema
//! before any transformation or store access happens.

mod errors;
mod validator;

pub use errors::{SchemaError, SchemaErrorCode, SchemaResult};
pub use validator::RegistrationValidator;

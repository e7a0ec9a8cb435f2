//! Registration payload validator
//!
//! The schema is loaded once at startup and is immutable afterwards.
//! Validation is not fail-fast: every violation is collected.

use std::fs;
use std::path::Path;

use jsonschema::Validator;
use serde_json::Value;

use super::errors::{SchemaError, SchemaResult};

/// Draft-4 validator for registration payloads.
pub struct RegistrationValidator {
    validator: Validator,
}

impl std::fmt::Debug for RegistrationValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationValidator").finish_non_exhaustive()
    }
}

impl RegistrationValidator {
    /// Loads and compiles the schema at `path`.
    ///
    /// # Errors
    ///
    /// - `RCS_SCHEMA_UNREADABLE` if the file cannot be read
    /// - `RCS_SCHEMA_MALFORMED` if it is not JSON or not a valid Draft-4 schema
    pub fn from_file(path: &Path) -> SchemaResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SchemaError::unreadable(path.display().to_string(), e.to_string())
        })?;

        let schema: Value = serde_json::from_str(&content).map_err(|e| {
            SchemaError::malformed_schema(path.display().to_string(), format!("Invalid JSON: {}", e))
        })?;

        Self::compile(&schema, &path.display().to_string())
    }

    /// Compiles an in-memory schema document.
    pub fn from_value(schema: &Value) -> SchemaResult<Self> {
        Self::compile(schema, "<in-memory>")
    }

    fn compile(schema: &Value, origin: &str) -> SchemaResult<Self> {
        let validator = jsonschema::draft4::new(schema)
            .map_err(|e| SchemaError::malformed_schema(origin, e.to_string()))?;
        Ok(Self { validator })
    }

    /// Validates a payload, reporting every violation.
    pub fn validate(&self, payload: &Value) -> SchemaResult<()> {
        let violations: Vec<String> = self
            .validator
            .iter_errors(payload)
            .map(|error| error.to_string())
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::validation_failed(violations))
        }
    }
}

//! Schema error types
//!
//! Two classes of failure:
//! - Loading the schema file (fatal at startup)
//! - A payload violating the schema (rejected, every violation reported)

use std::fmt;

/// Schema-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema file could not be read
    SchemaUnreadable,
    /// Schema file is not a valid Draft-4 schema
    SchemaMalformed,
    /// Payload violates the schema
    ValidationFailed,
}

impl SchemaErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::SchemaUnreadable => "RCS_SCHEMA_UNREADABLE",
            SchemaErrorCode::SchemaMalformed => "RCS_SCHEMA_MALFORMED",
            SchemaErrorCode::ValidationFailed => "RCS_SCHEMA_VALIDATION_FAILED",
        }
    }

    /// Whether the process cannot continue after this error
    pub fn is_fatal(&self) -> bool {
        !matches!(self, SchemaErrorCode::ValidationFailed)
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error with full context
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
    violations: Vec<String>,
}

impl SchemaError {
    /// Create an error for a schema file that cannot be read
    pub fn unreadable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaUnreadable,
            message: format!("Failed to read schema file '{}': {}", path.into(), reason.into()),
            violations: Vec::new(),
        }
    }

    /// Create an error for malformed schema file
    pub fn malformed_schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::SchemaMalformed,
            message: format!("Malformed schema file '{}': {}", path.into(), reason.into()),
            violations: Vec::new(),
        }
    }

    /// Create a validation failed error carrying every violation message
    pub fn validation_failed(violations: Vec<String>) -> Self {
        Self {
            code: SchemaErrorCode::ValidationFailed,
            message: format!("Payload violates schema ({} violation(s))", violations.len()),
            violations,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the violation messages (empty unless validation failed)
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    /// Consumes the error, returning the violation messages
    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }

    /// Returns whether this is a fatal error
    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

//! Observability for the registration service
//!
//! - Subscriber setup with a rotating file sink (`logger`)
//! - Request failure logging middleware lives with the HTTP layer

mod logger;

pub use logger::{init_logging, LogGuard};

use thiserror::Error;

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Errors raised while installing the log subscriber
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Invalid log filter: {0}")]
    Filter(String),

    #[error("Invalid log file path: {0}")]
    InvalidPath(String),

    #[error("Failed to prepare log directory '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to install log subscriber: {0}")]
    Install(String),
}

//! Service configuration
//!
//! Configuration is layered:
//! 1. Built-in defaults
//! 2. The `--config` file, when it exists
//! 3. The file named by the `RCS_CONFIG` environment variable
//!
//! Later layers only override the fields they actually contain.

mod errors;

pub use errors::{ConfigError, ConfigResult};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Environment variable pointing at an override config file
pub const CONFIG_ENV_VAR: &str = "RCS_CONFIG";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Registration service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// CouchDB connection string (default: "http://localhost:5984")
    #[serde(default = "default_db_conn")]
    pub db_conn: String,

    /// Database holding registration documents (default: "rcs")
    #[serde(default = "default_db_name")]
    pub db_name: String,

    /// Path to the Draft-4 registration schema
    #[serde(default = "default_reg_schema")]
    pub reg_schema: PathBuf,

    /// Rotating log file path
    #[serde(default = "default_log_file")]
    pub log_file: PathBuf,

    /// Minimum log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_db_conn() -> String {
    "http://localhost:5984".to_string()
}

fn default_db_name() -> String {
    "rcs".to_string()
}

fn default_reg_schema() -> PathBuf {
    PathBuf::from("schemas/registration.json")
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/rcs.log")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            db_conn: default_db_conn(),
            db_name: default_db_name(),
            reg_schema: default_reg_schema(),
            log_file: default_log_file(),
            log_level: default_log_level(),
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from `path` (if present) and the `RCS_CONFIG` override.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let override_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_layers(Some(path), override_path.as_deref())
    }

    /// Load configuration from explicit layers.
    ///
    /// A missing base file falls back to defaults; a missing override file is
    /// an error since it was asked for explicitly.
    pub fn load_layers(base: Option<&Path>, override_path: Option<&Path>) -> ConfigResult<Self> {
        let mut merged = serde_json::to_value(Self::default()).map_err(|e| {
            ConfigError::invalid("defaults", e.to_string())
        })?;

        let mut layers = Vec::new();
        for path in base.filter(|p| p.exists()).into_iter().chain(override_path) {
            overlay(&mut merged, read_object(path)?);
            layers.push(path.display().to_string());
        }

        let config: ServiceConfig = serde_json::from_value(merged).map_err(|e| ConfigError::Merge {
            layers: layers.join(", "),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.db_conn.trim().is_empty() {
            return Err(ConfigError::invalid("db_conn", "must not be empty"));
        }
        if self.db_name.trim().is_empty() {
            return Err(ConfigError::invalid("db_name", "must not be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::invalid("port", "must be > 0"));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::invalid(
                "log_level",
                format!("'{}' is not one of {:?}", self.log_level, LOG_LEVELS),
            ));
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Base URL of the registration database
    pub fn database_url(&self) -> String {
        format!("{}/{}", self.db_conn.trim_end_matches('/'), self.db_name)
    }
}

fn read_object(path: &Path) -> ConfigResult<serde_json::Map<String, Value>> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    match serde_json::from_str(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ConfigError::NotAnObject(path.to_path_buf())),
        Err(e) => Err(ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn overlay(base: &mut Value, patch: serde_json::Map<String, Value>) {
    if let Value::Object(target) = base {
        for (key, value) in patch {
            target.insert(key, value);
        }
    }
}

//! CLI command implementations
//!
//! `serve` boots in a fixed order: configuration, logging, schema, store,
//! then the HTTP listener. Any failure before the listener is fatal.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use crate::config::ServiceConfig;
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::registration::RegistrationPayload;
use crate::registry::Registry;
use crate::schema::RegistrationValidator;
use crate::store::{CouchStore, DocumentStore, MemoryStore};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            port,
            in_memory,
        } => serve(&config, port, in_memory),
        Command::Check { config, payload } => check(&config, &payload),
    }
}

/// Start the registration service
pub fn serve(config_path: &Path, port: Option<u16>, in_memory: bool) -> CliResult<()> {
    let mut config = ServiceConfig::load(config_path)?;
    if let Some(port) = port {
        config.port = port;
    }

    let _log_guard = init_logging(&config.log_file, &config.log_level)?;

    let validator = Arc::new(RegistrationValidator::from_file(&config.reg_schema)?);
    info!(schema = %config.reg_schema.display(), "registration schema loaded");

    let store: Arc<dyn DocumentStore> = if in_memory {
        info!("using in-memory document store");
        Arc::new(MemoryStore::new())
    } else {
        Arc::new(CouchStore::new(&config.database_url())?)
    };

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        store.ensure_database().await?;
        info!(db = %config.db_name, "document store ready");

        let server = HttpServer::new(&config, Registry::new(store, validator));
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Validate a payload file, printing every violation
pub fn check(config_path: &Path, payload_path: &Path) -> CliResult<()> {
    let config = ServiceConfig::load(config_path)?;
    let validator = RegistrationValidator::from_file(&config.reg_schema)?;

    let content = fs::read(payload_path).map_err(|e| {
        CliError::io_error(format!("Failed to read '{}': {}", payload_path.display(), e))
    })?;
    let payload: Value = serde_json::from_slice(&content)
        .map_err(|e| CliError::invalid_payload(format!("Unparsable json: {}", e)))?;

    let report = check_payload(&validator, payload);
    for line in &report.lines {
        println!("{}", line);
    }

    if report.valid {
        Ok(())
    } else {
        Err(CliError::invalid_payload(format!(
            "{} rejected",
            payload_path.display()
        )))
    }
}

/// Outcome of checking one payload
#[derive(Debug)]
pub struct CheckReport {
    pub valid: bool,
    pub lines: Vec<String>,
}

/// Runs schema validation and a trial transform.
pub fn check_payload(validator: &RegistrationValidator, payload: Value) -> CheckReport {
    if let Err(e) = validator.validate(&payload) {
        return CheckReport {
            valid: false,
            lines: e.violations().iter().map(|v| format!("invalid: {}", v)).collect(),
        };
    }

    match RegistrationPayload::from_value(payload).and_then(|p| p.transform("check")) {
        Ok(nodes) => CheckReport {
            valid: true,
            lines: vec![format!("valid {} registration", nodes.payload_type)],
        },
        Err(e) => CheckReport {
            valid: false,
            lines: vec![format!("invalid: {}", e)],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validator() -> RegistrationValidator {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("schemas/registration.json");
        RegistrationValidator::from_file(&path).unwrap()
    }

    #[test]
    fn test_check_valid_payload() {
        let report = check_payload(
            &validator(),
            json!({
                "payload_type": "esri_feature",
                "en": {"service_url": "http://maps.example/arcgis/rest/services/a/FeatureServer/0"},
                "fr": {"service_url": "http://maps.example/arcgis/rest/services/a/FeatureServer/0"}
            }),
        );
        assert!(report.valid);
        assert_eq!(report.lines, vec!["valid esri_feature registration".to_string()]);
    }

    #[test]
    fn test_check_reports_every_violation() {
        let report = check_payload(&validator(), json!({"payload_type": "wms"}));
        assert!(!report.valid);
        assert!(report.lines.len() >= 2);
        assert!(report.lines.iter().all(|l| l.starts_with("invalid: ")));
    }
}

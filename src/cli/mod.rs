//! CLI module for RCS
//!
//! Provides command-line interface for:
//! - serve: Boot the registration service
//! - check: Validate a payload file offline

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check, check_payload, run, run_command, serve, CheckReport};
pub use errors::{CliError, CliErrorCode, CliResult};

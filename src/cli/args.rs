//! CLI argument definitions using clap
//!
//! Commands:
//! - rcs serve --config <path> [--port <port>] [--in-memory]
//! - rcs check --config <path> <payload>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// RCS - registration service for bilingual layer documents
#[derive(Parser, Debug)]
#[command(name = "rcs")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP service
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rcs.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Keep documents in memory instead of CouchDB
        #[arg(long)]
        in_memory: bool,
    },

    /// Validate a registration payload file against the configured schema
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./rcs.json")]
        config: PathBuf,

        /// Payload file to validate
        payload: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["rcs", "serve", "--port", "8080", "--in-memory"]).unwrap();
        match cli.command {
            Command::Serve {
                config,
                port,
                in_memory,
            } => {
                assert_eq!(config, PathBuf::from("./rcs.json"));
                assert_eq!(port, Some(8080));
                assert!(in_memory);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_check_requires_payload() {
        assert!(Cli::try_parse_from(["rcs", "check"]).is_err());
        assert!(Cli::try_parse_from(["rcs", "check", "payload.json"]).is_ok());
    }
}

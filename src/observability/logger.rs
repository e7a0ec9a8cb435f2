//! Log subscriber setup
//!
//! Events go to two sinks:
//! - stderr, human readable
//! - a rotating log file, without ANSI colors
//!
//! The file rotates daily, not by size, and only the newest two files are
//! kept. Size-capped rotation is not available from `tracing-appender`.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from the configured level.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::{ObservabilityError, ObservabilityResult};

/// Rotated files kept next to the active one
const MAX_LOG_FILES: usize = 2;

/// Keeps the non-blocking file writer alive.
///
/// Dropping it flushes and stops the background writer, so hold it for the
/// lifetime of the process.
#[must_use = "dropping the guard stops file logging"]
pub struct LogGuard {
    _file: WorkerGuard,
}

/// Install the global subscriber.
pub fn init_logging(log_file: &Path, level: &str) -> ObservabilityResult<LogGuard> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ObservabilityError::Filter(e.to_string()))?;

    let appender = file_appender(log_file)?;
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);
    let file_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ObservabilityError::Install(e.to_string()))?;

    Ok(LogGuard { _file: guard })
}

fn file_appender(log_file: &Path) -> ObservabilityResult<RollingFileAppender> {
    let directory = match log_file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => Path::new(".").to_path_buf(),
    };
    let prefix = log_file
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ObservabilityError::InvalidPath(log_file.display().to_string()))?;

    fs::create_dir_all(&directory).map_err(|e| ObservabilityError::Io {
        path: directory.display().to_string(),
        source: e,
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .max_log_files(MAX_LOG_FILES)
        .build(&directory)
        .map_err(|e| ObservabilityError::Install(e.to_string()))
}

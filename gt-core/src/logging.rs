//! Logging setup on top of `tracing`.
//!
//! `init_logging` writes compact events to stderr and a full copy, with
//! source locations, to a daily-rotated file. The file copy can be JSON.
//! The filter accepts anything `EnvFilter` does, so `gt_api=debug` or
//! `gt_api::auth_tokens=trace` narrow output to one target.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants;
use crate::error::{GtError, GtResult};

/// Keeps the background log writer alive. Dropping it flushes the file.
pub struct LogGuard {
    _guard: WorkerGuard,
}

fn filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber: stderr plus a rotated file under `log_dir`.
///
/// Fails if `log_dir` cannot be created or a subscriber is already installed.
pub fn init_logging(level: &str, log_dir: &Path, json_output: bool) -> GtResult<LogGuard> {
    std::fs::create_dir_all(log_dir)?;

    let (writer, guard) =
        tracing_appender::non_blocking(rolling::daily(log_dir, constants::LOG_FILE_NAME));

    // Exactly one of these is Some; a None layer is a no-op.
    let (json_file, text_file) = if json_output {
        let layer = fmt::layer()
            .json()
            .with_writer(writer)
            .with_file(true)
            .with_line_number(true);
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(json_file)
        .with(text_file)
        .try_init()
        .map_err(|e| GtError::Config(format!("failed to install logger: {e}")))?;

    tracing::debug!(level, dir = %log_dir.display(), json_output, "logging initialized");

    Ok(LogGuard { _guard: guard })
}

/// Console-only logging. A no-op if a subscriber is already installed.
pub fn init_console_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(filter(level))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}

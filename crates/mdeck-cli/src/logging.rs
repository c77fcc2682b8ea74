//! Logging initialization.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `MDECK_LOG` environment variable, falling back to `info`. Output goes
//! to a file: the terminal itself belongs to the dashboard, so stderr is
//! not usable while it runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the tracing subscriber, writing to `<dir>/mdeck.log`.
///
/// Returns a worker guard the caller must keep alive for the lifetime of
/// the process; dropping it flushes and stops the writer thread.
///
/// # Errors
/// Returns an error if the log directory cannot be created.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, "mdeck.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("MDECK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

//! Logging infrastructure — file-based tracing for TUI runs.
//!
//! While the TUI owns the terminal, diagnostics cannot go to stdout without
//! corrupting the screen, so the subscriber writes to a daily-rolled file
//! under the platform state directory instead.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory the log files are written to
///
/// `$XDG_STATE_HOME/clarity-hub/logs` where available, falling back to the
/// local data directory, then the current directory.
pub fn log_directory() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("clarity-hub")
        .join("logs")
}

/// Install a file-writing tracing subscriber.
///
/// Returns the worker guard; dropping it flushes buffered log lines, so the
/// caller must hold it for the life of the process.
pub fn init_file_logging(filter: EnvFilter) -> std::io::Result<WorkerGuard> {
    let dir = log_directory();
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, "clarity-hub.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(guard)
}

//! Diagnostic logging setup.
//!
//! Log lines go to an append-mode file so a failed unattended run leaves a
//! trace behind. User-facing progress is printed separately by the
//! `ProgressReporter` adapter.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or empty
pub const DEFAULT_FILTER: &str = "bom_rollup=warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`]
pub fn env_filter() -> EnvFilter {
    std::env::var("RUST_LOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Installs the global tracing subscriber
///
/// Writes to `log_file` in append mode without ANSI colours. When the file
/// cannot be opened, logs go to stderr instead. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init(log_file: &Path) {
    use tracing_subscriber::fmt;

    match open_log_file(log_file) {
        Ok(file) => {
            let _ = fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
        }
        Err(e) => {
            let _ = fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .try_init();
            tracing::warn!(
                path = %log_file.display(),
                error = %e,
                "Could not open log file, logging to stderr"
            );
        }
    }
}

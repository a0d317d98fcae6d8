//! File logging setup.
//!
//! The terminal belongs to the clock while it runs, so log output can only
//! go to a file. Without a log file no subscriber is installed and the
//! `tracing` macros cost next to nothing.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use anyhow::{Context, Result};
use tracing::Level;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// Install a global subscriber appending to `path`.
///
/// Only the first call has any effect.
pub fn init_file_logging(path: &Path, level: Level) -> Result<()> {
    if TRACING_INIT.get().is_some() {
        return Ok(());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_thread_names(true)
        .with_writer(Mutex::new(file))
        .finish();

    if TRACING_INIT.set(()).is_ok() {
        // Another global default (e.g. set by an embedding app) wins
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
    Ok(())
}

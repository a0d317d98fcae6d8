//! Tests for file logging.

use std::fs;

use countdown::logging::init_file_logging;
use tempfile::TempDir;
use tracing::Level;

#[test]
fn log_file_receives_events() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("countdown.log");

    init_file_logging(&path, Level::INFO).unwrap();
    tracing::info!(marker = "log-file-check", "logging works");
    tracing::trace!("below the configured level");

    // Second install is a no-op
    init_file_logging(&temp_dir.path().join("other.log"), Level::TRACE).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("logging works"), "log was: {}", contents);
    assert!(contents.contains("log-file-check"));
    assert!(!contents.contains("below the configured level"));
    assert!(!temp_dir.path().join("other.log").exists());
}

//! Integration test for file logging.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding the log files
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use kittens_api::logging::{setup_logging, LoggingError, LogSettings};
use log::info;
use std::{env, fs, path::Path, sync::Mutex, thread, time::Duration};
use tempfile::TempDir;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_env() {
    for name in ["LOG_MODE", "LOG_LEVEL", "LOG_DATA_DIR", "LOG_MAX_SIZE"] {
        env::remove_var(name);
    }
}

#[test]
fn test_invalid_log_max_size() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    clear_env();
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_MAX_SIZE", "invalid_value");

    let result = setup_logging();
    clear_env();

    assert!(matches!(result, Err(LoggingError::InvalidMaxSize(_))));
}

// The global logger can only be installed once per process, so this is the only test in
// the binary that initializes it.
#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let _guard = ENV_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let temp_log_dir = temp_dir.path().join("logs");
    let temp_log_dir = temp_log_dir.to_str().unwrap();

    clear_env();
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", format!("{}/", temp_log_dir));

    let settings = LogSettings::from_env().expect("Valid log settings");
    setup_logging().expect("Logger initializes");
    clear_env();

    info!("kitten logging test line");
    thread::sleep(Duration::from_millis(100));

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let expected_path = settings.resolve_file_path(&date_str);
    assert!(
        Path::new(&expected_path).exists(),
        "Expected log file {} to exist",
        expected_path
    );

    let contents = fs::read_to_string(&expected_path).expect("Failed to read log file");
    assert!(contents.contains("kitten logging test line"));
}

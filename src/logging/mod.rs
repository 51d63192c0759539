//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory holding the log files (default "./logs")
//! - LOG_MAX_SIZE: when using file mode, the size in bytes after which a new file is started
//!   (default 1 GiB)
//!
//! File mode writes `kittens-YYYY-MM-DD.N.log`, moving to the next index once the current
//! file exceeds `LOG_MAX_SIZE`.

use chrono::Utc;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::Path,
};
use thiserror::Error;

const LOG_FILE_NAME: &str = "kittens.log";
const DEFAULT_LOG_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("LOG_MAX_SIZE must be a valid number of bytes: {0}")]
    InvalidMaxSize(String),
    #[error("Unable to prepare log file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to initialize logger: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    Stdout,
    File,
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub mode: LogMode,
    pub level: LevelFilter,
    pub data_dir: String,
    pub max_size: u64,
}

impl LogSettings {
    pub fn from_env() -> Result<Self, LoggingError> {
        let mode = match env::var("LOG_MODE") {
            Ok(mode) if mode.eq_ignore_ascii_case("file") => LogMode::File,
            _ => LogMode::Stdout,
        };
        let level = parse_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));
        let data_dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());
        let max_size = match env::var("LOG_MAX_SIZE") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| LoggingError::InvalidMaxSize(value))?,
            Err(_) => DEFAULT_LOG_MAX_SIZE,
        };

        Ok(Self {
            mode,
            level,
            data_dir,
            max_size,
        })
    }

    /// Path of the base log file inside the data directory.
    pub fn base_file_path(&self) -> String {
        format!("{}/{}", self.data_dir.trim_end_matches('/'), LOG_FILE_NAME)
    }

    /// The file to append to for `date_str`, skipping files that already exceed the
    /// size limit.
    pub fn resolve_file_path(&self, date_str: &str) -> String {
        let base_file_path = self.base_file_path();
        let first = compute_rolled_file_path(&base_file_path, date_str, 1);
        space_based_rolling(&first, &base_file_path, date_str, self.max_size)
    }
}

fn parse_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Computes the path of the rolled log file given the base file path and the date string.
pub fn compute_rolled_file_path(base_file_path: &str, date_str: &str, index: u32) -> String {
    let stem = base_file_path
        .strip_suffix(".log")
        .unwrap_or(base_file_path);
    format!("{}-{}.{}.log", stem, date_str, index)
}

/// Returns `file_path` unless it already exceeds `max_size` bytes, in which case the next
/// index whose file is small enough (or absent) is used.
pub fn space_based_rolling(
    file_path: &str,
    base_file_path: &str,
    date_str: &str,
    max_size: u64,
) -> String {
    let mut final_path = file_path.to_string();
    let mut index = 1;
    while let Ok(metadata) = metadata(&final_path) {
        if metadata.len() > max_size {
            index += 1;
            final_path = compute_rolled_file_path(base_file_path, date_str, index);
        } else {
            break;
        }
    }
    final_path
}

/// Sets up logging by reading configuration from environment variables.
pub fn setup_logging() -> Result<(), LoggingError> {
    let settings = LogSettings::from_env()?;

    match settings.mode {
        LogMode::File => {
            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let final_path = settings.resolve_file_path(&date_str);

            if let Some(parent) = Path::new(&final_path).parent() {
                create_dir_all(parent).map_err(|source| LoggingError::Io {
                    path: final_path.clone(),
                    source,
                })?;
            }

            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&final_path)
                .map_err(|source| LoggingError::Io {
                    path: final_path.clone(),
                    source,
                })?;
            WriteLogger::init(settings.level, Config::default(), log_file)?;
            info!("Logging to file: {}", final_path);
        }
        LogMode::Stdout => {
            SimpleLogger::init(settings.level, Config::default())?;
        }
    }

    info!(
        "Logging is successfully configured (mode: {:?}, level: {})",
        settings.mode, settings.level
    );
    Ok(())
}

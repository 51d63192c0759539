//! This module contains the function to log service information at startup.
use crate::config::ServerConfig;
use log::info;
use std::env;

/// Logs service information at startup
pub fn log_service_info(config: &ServerConfig) {
    let service_name = env!("CARGO_PKG_NAME");
    let service_version = env!("CARGO_PKG_VERSION");

    info!("=== Kittens API Starting ===");
    info!("Service: {} v{}", service_name, service_version);
    info!("Rust Version: {}", env!("CARGO_PKG_RUST_VERSION"));
    info!("Platform: {} ({})", env::consts::OS, env::consts::ARCH);

    if let Ok(cwd) = env::current_dir() {
        info!("Working Directory: {}", cwd.display());
    }

    info!("Listening on: {}:{}", config.host, config.port);
    info!("Repository storage: {}", config.repository_storage_type);
    if let Some(database) = &config.database {
        info!("Database: {}", database.redacted_url());
    }
    if config.enable_swagger {
        info!("OpenAPI document served at /api-docs/openapi.json");
    }

    info!(
        "Started at: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}

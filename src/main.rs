//! # Kittens API
//!
//! A record-management service for kittens backed by PostgreSQL.
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - HTTP endpoints for creating, listing, retrieving, updating and deleting kittens
//! - Postgres and in-memory repository implementations
//! - Prometheus metrics and an optional OpenAPI document
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use actix_web::{
    middleware::{self, Logger},
    App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use kittens_api::{
    api::routes::{configure_routes, docs},
    config::ServerConfig,
    init::initialize_app_state,
    logging::setup_logging,
    metrics::middleware::MetricsMiddleware,
    utils::log_service_info,
};

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging().wrap_err("Failed to set up logging")?;

    let config = ServerConfig::from_env().wrap_err("Failed to load server configuration")?;
    log_service_info(&config);

    let app_state = initialize_app_state(&config).await?;

    let enable_swagger = config.enable_swagger;
    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(MetricsMiddleware)
            .wrap(middleware::Compress::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .configure(configure_routes)
            .configure(|cfg| {
                if enable_swagger {
                    docs::init(cfg);
                }
            })
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}

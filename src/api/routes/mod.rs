//! # API Routes Module
//!
//! Configures HTTP routes for the kittens service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/kittens` - Kitten management endpoints
//! * `/metrics` - Prometheus metrics

pub mod docs;
pub mod health;
pub mod kitten;
pub mod metrics;

use actix_web::{error, web, HttpRequest};

use crate::models::ApiError;

fn unprocessable(err: impl std::fmt::Display, _req: &HttpRequest) -> error::Error {
    ApiError::UnprocessableEntity(err.to_string()).into()
}

/// Registers every route plus extractor error handlers that render malformed bodies, paths
/// and queries with the common error body.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, req| unprocessable(err, req)))
        .app_data(web::PathConfig::default().error_handler(|err, req| unprocessable(err, req)))
        .app_data(web::QueryConfig::default().error_handler(|err, req| unprocessable(err, req)))
        .configure(health::init)
        .configure(kitten::init)
        .configure(metrics::init);
}

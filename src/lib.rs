//! Kittens API Library
//!
//! This library provides a record-management service for kittens. It includes:
//!
//! - Validation of kitten fields against fixed character sets, ranges and enumerations
//! - Name uniqueness enforcement
//! - In-memory and PostgreSQL-backed repositories
//! - An actix-web HTTP API with Prometheus metrics and OpenAPI documentation
//!
//! # Module Structure
//!
//! - `api`: HTTP routes and controllers
//! - `config`: Configuration management
//! - `constants`: Field limits, patterns and client messages
//! - `init`: Startup wiring
//! - `logging`: Logging setup
//! - `metrics`: Prometheus metrics
//! - `models`: Data structures and error types
//! - `repositories`: Kitten storage
//! - `services`: The kitten validation and persistence pipeline
//! - `utils`: Common utilities and helper functions

pub mod api;
pub mod config;
pub mod constants;
pub mod init;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod utils;

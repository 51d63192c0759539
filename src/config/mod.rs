//! Configuration system for the Kittens API.
//!
//! Settings are read from the process environment (optionally seeded from a `.env` file)
//! into a [`ServerConfig`]. Database settings are only required when the service runs on
//! the Postgres repository.
mod server_config;
pub use server_config::*;

mod error;
pub use error::*;

//! Startup wiring: builds the repository and application state from the server
//! configuration.
mod initialize_app_state;
pub use initialize_app_state::*;

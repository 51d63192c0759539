//! # Models Module
//!
//! Contains core data structures and type definitions for the kittens service.

mod kitten;
pub use kitten::*;

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod error;
pub use error::*;

mod secret_string;
pub use secret_string::*;

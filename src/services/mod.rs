//! # Services Module
//!
//! Business logic sitting between the HTTP controllers and the repositories.

mod kitten;
pub use kitten::*;

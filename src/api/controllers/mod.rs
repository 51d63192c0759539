//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `kitten` - Kitten records and the breed/color discovery endpoints

pub mod kitten;

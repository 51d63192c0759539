//! This module contains all the constant values used in the system
mod kitten;
pub use kitten::*;

mod validation;
pub use validation::*;

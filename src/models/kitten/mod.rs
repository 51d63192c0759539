//! Kitten domain model.
//!
//! This module provides the types that describe a kitten throughout the service:
//!
//! - **Enumerations**: the closed [`Breed`] and [`Color`] sets
//! - **Validation**: field validators shared by creation and update
//! - **Requests**: creation form, partial update and list query
//! - **Responses**: full and summary projections of a stored kitten
//! - **Repository model**: the persisted record

mod breed;
pub use breed::*;

mod color;
pub use color::*;

mod validation;
pub use validation::*;

mod request;
pub use request::*;

mod response;
pub use response::*;

mod repository;
pub use repository::*;

/// A validated kitten that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewKitten {
    pub name: String,
    pub description: String,
    pub breed: Breed,
    pub age: i32,
    pub color: Color,
}

/// Validated field changes for a partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KittenChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub breed: Option<Breed>,
    pub age: Option<i32>,
    pub color: Option<Color>,
}

impl KittenChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.breed.is_none()
            && self.age.is_none()
            && self.color.is_none()
    }
}

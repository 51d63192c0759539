//! Field validators for kitten records.
//!
//! Each validator either passes silently or fails with a [`KittenValidationError`] whose
//! [`ValidationStatus`] decides the HTTP status the failure is reported with. Callers run
//! them in a fixed order (name, description, breed, age, color) and stop at the first
//! failure.

use std::{num::IntErrorKind, str::FromStr};

use thiserror::Error;

use crate::{
    constants::{
        KITTEN_DESCRIPTION_MAX_LENGTH, KITTEN_DESCRIPTION_REGEX, KITTEN_MAX_AGE, KITTEN_MIN_AGE,
        KITTEN_NAME_MAX_LENGTH, KITTEN_NAME_MIN_LENGTH, KITTEN_NAME_REGEX,
    },
    models::ApiError,
};

use super::{AgeInput, Breed, Color};

/// How a validation failure is classified towards the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// The value breaks a character-set or membership rule (400).
    BadRequest,
    /// The value is empty or out of its permitted range (422).
    Unprocessable,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KittenValidationError {
    #[error("Username cannot be empty")]
    EmptyName,
    #[error("Name must be between 4 and 20 characters long")]
    NameLength,
    #[error("Kitten name must contain only Latin or Cyrillic letters")]
    NameCharacters,
    #[error("Description cannot be empty")]
    EmptyDescription,
    #[error("Description must be no more than 200 characters long")]
    DescriptionTooLong,
    #[error(
        "Description must contain only Latin or Cyrillic letters, numbers, and punctuation marks"
    )]
    DescriptionCharacters,
    #[error("Breed cannot be empty")]
    EmptyBreed,
    #[error("Invalid breed provided")]
    InvalidBreed,
    #[error("Age cannot be empty")]
    EmptyAge,
    #[error("Age must be a valid integer")]
    AgeNotInteger,
    #[error("Age must be a positive number and no more than 6")]
    AgeOutOfRange,
    #[error("Color cannot be empty")]
    EmptyColor,
    #[error("Invalid color provided")]
    InvalidColor,
}

impl KittenValidationError {
    pub fn status(&self) -> ValidationStatus {
        match self {
            KittenValidationError::NameCharacters
            | KittenValidationError::DescriptionCharacters
            | KittenValidationError::InvalidBreed
            | KittenValidationError::AgeNotInteger
            | KittenValidationError::InvalidColor => ValidationStatus::BadRequest,
            KittenValidationError::EmptyName
            | KittenValidationError::NameLength
            | KittenValidationError::EmptyDescription
            | KittenValidationError::DescriptionTooLong
            | KittenValidationError::EmptyBreed
            | KittenValidationError::EmptyAge
            | KittenValidationError::AgeOutOfRange
            | KittenValidationError::EmptyColor => ValidationStatus::Unprocessable,
        }
    }
}

impl From<KittenValidationError> for ApiError {
    fn from(error: KittenValidationError) -> Self {
        match error.status() {
            ValidationStatus::BadRequest => ApiError::BadRequest(error.to_string()),
            ValidationStatus::Unprocessable => ApiError::UnprocessableEntity(error.to_string()),
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), KittenValidationError> {
    if name.is_empty() {
        return Err(KittenValidationError::EmptyName);
    }
    let length = name.chars().count();
    if !(KITTEN_NAME_MIN_LENGTH..=KITTEN_NAME_MAX_LENGTH).contains(&length) {
        return Err(KittenValidationError::NameLength);
    }
    if !KITTEN_NAME_REGEX.is_match(name) {
        return Err(KittenValidationError::NameCharacters);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), KittenValidationError> {
    if description.is_empty() {
        return Err(KittenValidationError::EmptyDescription);
    }
    if description.chars().count() > KITTEN_DESCRIPTION_MAX_LENGTH {
        return Err(KittenValidationError::DescriptionTooLong);
    }
    if !KITTEN_DESCRIPTION_REGEX.is_match(description) {
        return Err(KittenValidationError::DescriptionCharacters);
    }
    Ok(())
}

pub fn validate_breed(breed: &str) -> Result<Breed, KittenValidationError> {
    if breed.is_empty() {
        return Err(KittenValidationError::EmptyBreed);
    }
    Breed::from_str(breed).map_err(|_| KittenValidationError::InvalidBreed)
}

/// Validates an age given either as a JSON number or as a numeric string.
///
/// Zero and the empty string count as a missing age.
pub fn validate_age(age: &AgeInput) -> Result<i32, KittenValidationError> {
    let value = match age {
        AgeInput::Number(0) => return Err(KittenValidationError::EmptyAge),
        AgeInput::Number(value) => *value,
        AgeInput::Text(text) if text.is_empty() => return Err(KittenValidationError::EmptyAge),
        AgeInput::Text(text) => text.trim().parse::<i64>().map_err(|err| match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                KittenValidationError::AgeOutOfRange
            }
            _ => KittenValidationError::AgeNotInteger,
        })?,
    };

    if !(KITTEN_MIN_AGE..=KITTEN_MAX_AGE).contains(&value) {
        return Err(KittenValidationError::AgeOutOfRange);
    }
    i32::try_from(value).map_err(|_| KittenValidationError::AgeOutOfRange)
}

pub fn validate_color(color: &str) -> Result<Color, KittenValidationError> {
    if color.is_empty() {
        return Err(KittenValidationError::EmptyColor);
    }
    Color::from_str(color).map_err(|_| KittenValidationError::InvalidColor)
}

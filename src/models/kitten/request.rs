//! Request models for kitten endpoints.
//!
//! Incoming payloads keep their fields loosely typed (plain strings, numbers or numeric
//! strings for the age) so that every constraint is reported by the kitten validators
//! with a precise message instead of a generic deserialization error.

use std::fmt;

use serde::{
    de::{self, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize,
};
use utoipa::ToSchema;

use crate::constants::DEFAULT_KITTEN_DESCRIPTION;

use super::{
    validate_age, validate_breed, validate_color, validate_description, validate_name, Breed,
    Color, KittenChanges, KittenValidationError, NewKitten,
};
use crate::utils::title_case;

/// Age as supplied by the client: either a JSON integer or a string holding one.
///
/// Integers outside the `i64` range saturate to its bounds, which the age validator
/// rejects as out of range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum AgeInput {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for AgeInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(AgeInputVisitor)
    }
}

struct AgeInputVisitor;

impl<'de> Visitor<'de> for AgeInputVisitor {
    type Value = AgeInput;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string holding one")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<AgeInput, E> {
        Ok(AgeInput::Number(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<AgeInput, E> {
        Ok(AgeInput::Number(i64::try_from(value).unwrap_or(i64::MAX)))
    }

    // JSON integers too large for u64 arrive as floats.
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<AgeInput, E> {
        if value.fract() == 0.0 && value >= i64::MAX as f64 {
            Ok(AgeInput::Number(i64::MAX))
        } else if value.fract() == 0.0 && value <= i64::MIN as f64 {
            Ok(AgeInput::Number(i64::MIN))
        } else {
            Err(E::invalid_type(Unexpected::Float(value), &self))
        }
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<AgeInput, E> {
        Ok(AgeInput::Text(value.to_owned()))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<AgeInput, E> {
        Ok(AgeInput::Text(value))
    }
}

impl Default for AgeInput {
    fn default() -> Self {
        AgeInput::Number(0)
    }
}

impl From<i64> for AgeInput {
    fn from(value: i64) -> Self {
        AgeInput::Number(value)
    }
}

/// Creation form for a kitten.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KittenCreateRequest {
    pub name: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_breed")]
    pub breed: String,
    #[serde(default)]
    #[schema(value_type = i64)]
    pub age: AgeInput,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_description() -> String {
    DEFAULT_KITTEN_DESCRIPTION.to_string()
}

fn default_breed() -> String {
    Breed::default().to_string()
}

fn default_color() -> String {
    Color::default().to_string()
}

impl KittenCreateRequest {
    /// Runs the field validators in order and builds the record to insert.
    ///
    /// The returned name is normalized to title case.
    pub fn validate(&self) -> Result<NewKitten, KittenValidationError> {
        validate_name(&self.name)?;
        validate_description(&self.description)?;
        let breed = validate_breed(&self.breed)?;
        let age = validate_age(&self.age)?;
        let color = validate_color(&self.color)?;

        Ok(NewKitten {
            name: title_case(&self.name),
            description: self.description.clone(),
            breed,
            age,
            color,
        })
    }
}

/// Partial update for a kitten. Absent or `null` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct KittenUpdateRequest {
    #[serde(default)]
    #[schema(nullable = false)]
    pub name: Option<String>,
    #[serde(default)]
    #[schema(nullable = false)]
    pub description: Option<String>,
    #[serde(default)]
    #[schema(nullable = false)]
    pub breed: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<i64>)]
    pub age: Option<AgeInput>,
    #[serde(default)]
    #[schema(nullable = false)]
    pub color: Option<String>,
}

impl KittenUpdateRequest {
    /// Validates only the supplied fields, in the same order and with the same rules as
    /// creation.
    pub fn validate(&self) -> Result<KittenChanges, KittenValidationError> {
        let name = match &self.name {
            Some(name) => {
                validate_name(name)?;
                Some(title_case(name))
            }
            None => None,
        };
        if let Some(description) = &self.description {
            validate_description(description)?;
        }
        let breed = self.breed.as_deref().map(validate_breed).transpose()?;
        let age = self.age.as_ref().map(validate_age).transpose()?;
        let color = self.color.as_deref().map(validate_color).transpose()?;

        Ok(KittenChanges {
            name,
            description: self.description.clone(),
            breed,
            age,
            color,
        })
    }
}

/// Query parameters of the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KittenListQuery {
    pub breed: Option<String>,
}

impl KittenListQuery {
    /// The breed filter, checked with the breed validator when present.
    pub fn breed_filter(&self) -> Result<Option<Breed>, KittenValidationError> {
        self.breed.as_deref().map(validate_breed).transpose()
    }
}

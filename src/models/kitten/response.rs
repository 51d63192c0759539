use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Breed, Color, KittenRepoModel};

/// Full projection of a stored kitten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KittenResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub breed: Breed,
    pub age: i32,
    pub color: Color,
}

impl From<KittenRepoModel> for KittenResponse {
    fn from(kitten: KittenRepoModel) -> Self {
        Self {
            id: kitten.id,
            name: kitten.name,
            description: kitten.description,
            breed: kitten.breed,
            age: kitten.age,
            color: kitten.color,
        }
    }
}

/// List projection: identity and description only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct KittenSummary {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl From<&KittenRepoModel> for KittenSummary {
    fn from(kitten: &KittenRepoModel) -> Self {
        Self {
            id: kitten.id,
            name: kitten.name.clone(),
            description: kitten.description.clone(),
        }
    }
}

/// Response of the create and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct KittenMessageResponse {
    pub message: String,
    pub kitten: KittenResponse,
}

impl KittenMessageResponse {
    pub fn new(message: impl Into<String>, kitten: KittenResponse) -> Self {
        Self {
            message: message.into(),
            kitten,
        }
    }
}

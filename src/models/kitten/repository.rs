use serde::{Deserialize, Serialize};

use super::{Breed, Color, KittenChanges, NewKitten};

/// A kitten as persisted by the repositories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KittenRepoModel {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub breed: Breed,
    pub age: i32,
    pub color: Color,
}

impl KittenRepoModel {
    pub fn from_new(id: i64, kitten: NewKitten) -> Self {
        Self {
            id,
            name: kitten.name,
            description: kitten.description,
            breed: kitten.breed,
            age: kitten.age,
            color: kitten.color,
        }
    }

    /// Overwrites every field present in `changes`, leaving the others as they are.
    pub fn apply(&mut self, changes: KittenChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(breed) = changes.breed {
            self.breed = breed;
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        if let Some(color) = changes.color {
            self.color = color;
        }
    }
}

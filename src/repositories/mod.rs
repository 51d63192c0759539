//! # Repository Module
//!
//! Implements the data persistence layer for the kittens service using the Repository
//! pattern. Every mutating operation is its own unit of work: it commits before returning,
//! and nothing is persisted when it fails.

use crate::models::{
    Breed, KittenRepoModel, KittenSummary, NewKitten, RepositoryError,
};
use async_trait::async_trait;

mod postgres_base;
pub use postgres_base::*;

mod kitten;
pub use kitten::*;

#[async_trait]
pub trait KittenRepository: Send + Sync {
    /// Inserts a kitten and returns it with its store-generated id.
    async fn create(&self, kitten: NewKitten) -> Result<KittenRepoModel, RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<KittenRepoModel, RepositoryError>;

    /// Lists summaries ordered by id, optionally restricted to one breed.
    async fn list_summaries(
        &self,
        breed: Option<Breed>,
    ) -> Result<Vec<KittenSummary>, RepositoryError>;

    /// Replaces the stored record with the same id.
    async fn update(&self, kitten: KittenRepoModel) -> Result<KittenRepoModel, RepositoryError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;

    /// Returns whether a kitten other than `exclude_id` already uses `name`.
    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError>;
}

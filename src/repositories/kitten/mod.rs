//! Kitten Repository Module
//!
//! Provides the storage implementations behind [`KittenRepository`]:
//!
//! - [`InMemoryKittenRepository`]: process-local storage for development and tests
//! - [`PostgresKittenRepository`]: the relational store used in production
//!
//! [`KittenRepositoryStorage`] wraps both so the rest of the service can be written
//! against one concrete type chosen at startup.

mod kitten_in_memory;
mod kitten_postgres;

pub use kitten_in_memory::*;
pub use kitten_postgres::*;

use crate::{
    models::{Breed, KittenRepoModel, KittenSummary, NewKitten, RepositoryError},
    repositories::KittenRepository,
};
use async_trait::async_trait;
use sqlx::PgPool;

/// Enum wrapper for the kitten repository implementations
#[derive(Debug)]
pub enum KittenRepositoryStorage {
    InMemory(InMemoryKittenRepository),
    Postgres(PostgresKittenRepository),
}

impl KittenRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryKittenRepository::new())
    }

    pub fn new_postgres(pool: PgPool) -> Self {
        Self::Postgres(PostgresKittenRepository::new(pool))
    }
}

impl Default for KittenRepositoryStorage {
    fn default() -> Self {
        Self::new_in_memory()
    }
}

#[async_trait]
impl KittenRepository for KittenRepositoryStorage {
    async fn create(&self, kitten: NewKitten) -> Result<KittenRepoModel, RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.create(kitten).await,
            KittenRepositoryStorage::Postgres(repo) => repo.create(kitten).await,
        }
    }

    async fn get_by_id(&self, id: i64) -> Result<KittenRepoModel, RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.get_by_id(id).await,
            KittenRepositoryStorage::Postgres(repo) => repo.get_by_id(id).await,
        }
    }

    async fn list_summaries(
        &self,
        breed: Option<Breed>,
    ) -> Result<Vec<KittenSummary>, RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.list_summaries(breed).await,
            KittenRepositoryStorage::Postgres(repo) => repo.list_summaries(breed).await,
        }
    }

    async fn update(&self, kitten: KittenRepoModel) -> Result<KittenRepoModel, RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.update(kitten).await,
            KittenRepositoryStorage::Postgres(repo) => repo.update(kitten).await,
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.delete_by_id(id).await,
            KittenRepositoryStorage::Postgres(repo) => repo.delete_by_id(id).await,
        }
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        match self {
            KittenRepositoryStorage::InMemory(repo) => repo.exists_by_name(name, exclude_id).await,
            KittenRepositoryStorage::Postgres(repo) => repo.exists_by_name(name, exclude_id).await,
        }
    }
}

#[cfg(test)]
mockall::mock! {
    pub KittenRepository {}

    #[async_trait]
    impl KittenRepository for KittenRepository {
        async fn create(&self, kitten: NewKitten) -> Result<KittenRepoModel, RepositoryError>;
        async fn get_by_id(&self, id: i64) -> Result<KittenRepoModel, RepositoryError>;
        async fn list_summaries(&self, breed: Option<Breed>) -> Result<Vec<KittenSummary>, RepositoryError>;
        async fn update(&self, kitten: KittenRepoModel) -> Result<KittenRepoModel, RepositoryError>;
        async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError>;
        async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> Result<bool, RepositoryError>;
    }
}

//! This module defines an in-memory repository for kittens.
//!
//! It mirrors the relational store's behavior: ids are assigned from a monotonically
//! increasing sequence, names are unique, and listings are ordered by id. The store is
//! protected by a `Mutex`, so each operation observes and commits a consistent state.
use crate::{
    models::{Breed, KittenRepoModel, KittenSummary, NewKitten, RepositoryError},
    repositories::KittenRepository,
};
use async_trait::async_trait;
use log::debug;
use std::collections::BTreeMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
struct KittenStore {
    kittens: BTreeMap<i64, KittenRepoModel>,
    last_id: i64,
}

impl KittenStore {
    fn name_taken(&self, name: &str, exclude_id: Option<i64>) -> bool {
        self.kittens
            .values()
            .any(|kitten| kitten.name == name && Some(kitten.id) != exclude_id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryKittenRepository {
    store: Mutex<KittenStore>,
}

impl InMemoryKittenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn acquire_lock(&self) -> Result<MutexGuard<'_, KittenStore>, RepositoryError> {
        Ok(self.store.lock().await)
    }
}

fn not_found(id: i64) -> RepositoryError {
    RepositoryError::NotFound(format!("Kitten with ID {} not found", id))
}

fn name_conflict(name: &str) -> RepositoryError {
    RepositoryError::ConstraintViolation(format!("Kitten with name {} already exists", name))
}

#[async_trait]
impl KittenRepository for InMemoryKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<KittenRepoModel, RepositoryError> {
        let mut store = self.acquire_lock().await?;
        if store.name_taken(&kitten.name, None) {
            return Err(name_conflict(&kitten.name));
        }

        store.last_id += 1;
        let created = KittenRepoModel::from_new(store.last_id, kitten);
        store.kittens.insert(created.id, created.clone());

        debug!("Created kitten with ID: {}", created.id);
        Ok(created)
    }

    async fn get_by_id(&self, id: i64) -> Result<KittenRepoModel, RepositoryError> {
        let store = self.acquire_lock().await?;
        store.kittens.get(&id).cloned().ok_or_else(|| not_found(id))
    }

    async fn list_summaries(
        &self,
        breed: Option<Breed>,
    ) -> Result<Vec<KittenSummary>, RepositoryError> {
        let store = self.acquire_lock().await?;
        let summaries = store
            .kittens
            .values()
            .filter(|kitten| breed.map_or(true, |breed| kitten.breed == breed))
            .map(KittenSummary::from)
            .collect();
        Ok(summaries)
    }

    async fn update(&self, kitten: KittenRepoModel) -> Result<KittenRepoModel, RepositoryError> {
        let mut store = self.acquire_lock().await?;
        if !store.kittens.contains_key(&kitten.id) {
            return Err(not_found(kitten.id));
        }
        if store.name_taken(&kitten.name, Some(kitten.id)) {
            return Err(name_conflict(&kitten.name));
        }

        store.kittens.insert(kitten.id, kitten.clone());
        debug!("Updated kitten with ID: {}", kitten.id);
        Ok(kitten)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut store = self.acquire_lock().await?;
        store.kittens.remove(&id).ok_or_else(|| not_found(id))?;
        debug!("Deleted kitten with ID: {}", id);
        Ok(())
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        let store = self.acquire_lock().await?;
        Ok(store.name_taken(name, exclude_id))
    }
}

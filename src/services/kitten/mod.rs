//! This module provides the kitten service.
//!
//! `KittenService` runs the validation and persistence pipeline for every kitten operation:
//! field validation, the name-uniqueness check, record construction and the repository
//! call. Each mutating repository call commits on its own, so a failure anywhere in the
//! pipeline leaves the store untouched.
use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    metrics::record_kitten_operation,
    models::{
        Breed, KittenCreateRequest, KittenRepoModel, KittenServiceError, KittenSummary,
        KittenUpdateRequest, RepositoryError,
    },
    repositories::KittenRepository,
};

#[derive(Debug)]
pub struct KittenService<R: KittenRepository> {
    repository: Arc<R>,
}

impl<R: KittenRepository> Clone for KittenService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: KittenRepository> KittenService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn create(
        &self,
        request: KittenCreateRequest,
    ) -> Result<KittenRepoModel, KittenServiceError> {
        observe("create", self.try_create(request).await)
    }

    async fn try_create(
        &self,
        request: KittenCreateRequest,
    ) -> Result<KittenRepoModel, KittenServiceError> {
        let kitten = request.validate()?;
        self.ensure_name_available(&kitten.name, None).await?;

        let name = kitten.name.clone();
        let created = self
            .repository
            .create(kitten)
            .await
            .map_err(|e| name_conflict_or(e, &name))?;

        info!("Kitten {} created with ID {}", created.name, created.id);
        Ok(created)
    }

    /// Lists kitten summaries ordered by id, optionally restricted to one breed.
    pub async fn list(
        &self,
        breed: Option<Breed>,
    ) -> Result<Vec<KittenSummary>, KittenServiceError> {
        let summaries = self.repository.list_summaries(breed).await?;
        debug!("Found {} kittens", summaries.len());
        Ok(summaries)
    }

    pub async fn get(&self, id: i64) -> Result<KittenRepoModel, KittenServiceError> {
        self.repository
            .get_by_id(id)
            .await
            .map_err(|e| not_found_or(e, id))
    }

    /// Applies the supplied fields to an existing kitten.
    ///
    /// Supplied fields go through the same validators as on creation; a supplied name is
    /// title-cased and must not belong to another kitten.
    pub async fn update(
        &self,
        id: i64,
        request: KittenUpdateRequest,
    ) -> Result<KittenRepoModel, KittenServiceError> {
        observe("update", self.try_update(id, request).await)
    }

    async fn try_update(
        &self,
        id: i64,
        request: KittenUpdateRequest,
    ) -> Result<KittenRepoModel, KittenServiceError> {
        let mut kitten = self.get(id).await?;
        let changes = request.validate()?;

        if changes.is_empty() {
            debug!("No changes supplied for kitten {}", id);
            return Ok(kitten);
        }

        if let Some(name) = &changes.name {
            self.ensure_name_available(name, Some(id)).await?;
        }

        kitten.apply(changes);
        let name = kitten.name.clone();
        let updated = self.repository.update(kitten).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => KittenServiceError::NotFound(id),
            other => name_conflict_or(other, &name),
        })?;

        info!("Kitten {} updated", id);
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), KittenServiceError> {
        observe("delete", self.try_delete(id).await)
    }

    async fn try_delete(&self, id: i64) -> Result<(), KittenServiceError> {
        self.get(id).await?;
        self.repository
            .delete_by_id(id)
            .await
            .map_err(|e| not_found_or(e, id))?;

        info!("Kitten {} deleted", id);
        Ok(())
    }

    async fn ensure_name_available(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), KittenServiceError> {
        if self.repository.exists_by_name(name, exclude_id).await? {
            warn!("Kitten name {} is already taken", name);
            return Err(KittenServiceError::NameTaken(name.to_string()));
        }
        Ok(())
    }
}

fn observe<T>(
    operation: &str,
    result: Result<T, KittenServiceError>,
) -> Result<T, KittenServiceError> {
    record_kitten_operation(operation, result.is_ok());
    result
}

fn not_found_or(error: RepositoryError, id: i64) -> KittenServiceError {
    match error {
        RepositoryError::NotFound(_) => KittenServiceError::NotFound(id),
        other => other.into(),
    }
}

/// The name is the only unique column, so a constraint violation means a concurrent
/// writer took it between the check and the write.
fn name_conflict_or(error: RepositoryError, name: &str) -> KittenServiceError {
    match error {
        RepositoryError::ConstraintViolation(_) => {
            warn!("Kitten name {} taken by a concurrent write", name);
            KittenServiceError::NameTaken(name.to_string())
        }
        other => other.into(),
    }
}

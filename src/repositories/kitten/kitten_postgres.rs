//! Postgres-backed implementation of the KittenRepository.
//!
//! Records live in the `kittens` table (see `sql/kittens.sql`). Breed and color are stored
//! as their display names and parsed back on read; a row holding a value outside the
//! closed sets is reported as [`RepositoryError::InvalidData`].

use crate::models::{
    Breed, Color, KittenRepoModel, KittenSummary, NewKitten, RepositoryError,
};
use crate::repositories::{KittenRepository, PostgresRepository};
use async_trait::async_trait;
use log::{debug, error};
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    FromRow, PgPool,
};
use std::str::FromStr;

const SELECT_KITTEN: &str =
    "SELECT id, name, description, breed, age, color FROM kittens WHERE id = $1";

const INSERT_KITTEN: &str = "INSERT INTO kittens (name, description, breed, age, color) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, name, description, breed, age, color";

const UPDATE_KITTEN: &str = "UPDATE kittens \
     SET name = $2, description = $3, breed = $4, age = $5, color = $6 \
     WHERE id = $1 \
     RETURNING id, name, description, breed, age, color";

const DELETE_KITTEN: &str = "DELETE FROM kittens WHERE id = $1";

const LIST_SUMMARIES: &str = "SELECT id, name, description FROM kittens \
     WHERE ($1::VARCHAR IS NULL OR breed = $1) \
     ORDER BY id";

const NAME_EXISTS: &str = "SELECT EXISTS(\
     SELECT 1 FROM kittens WHERE name = $1 AND ($2::BIGINT IS NULL OR id <> $2))";

#[derive(Debug, FromRow)]
struct KittenRow {
    id: i64,
    name: String,
    description: String,
    breed: String,
    age: i32,
    color: String,
}

impl TryFrom<KittenRow> for KittenRepoModel {
    type Error = RepositoryError;

    fn try_from(row: KittenRow) -> Result<Self, Self::Error> {
        let breed = Breed::from_str(&row.breed).map_err(|_| {
            RepositoryError::InvalidData(format!(
                "Kitten {} has unknown breed '{}'",
                row.id, row.breed
            ))
        })?;
        let color = Color::from_str(&row.color).map_err(|_| {
            RepositoryError::InvalidData(format!(
                "Kitten {} has unknown color '{}'",
                row.id, row.color
            ))
        })?;

        Ok(KittenRepoModel {
            id: row.id,
            name: row.name,
            description: row.description,
            breed,
            age: row.age,
            color,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PostgresKittenRepository {
    pool: PgPool,
}

impl PostgresRepository for PostgresKittenRepository {}

impl PostgresKittenRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a connection pool with the given connect options.
    pub async fn connect(
        options: PgConnectOptions,
        max_connections: u32,
    ) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("Failed to connect to Postgres: {}", e);
                RepositoryError::ConnectionError(format!("Failed to connect to Postgres: {}", e))
            })?;

        debug!(
            "Connected to Postgres with up to {} pooled connections",
            max_connections
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl KittenRepository for PostgresKittenRepository {
    async fn create(&self, kitten: NewKitten) -> Result<KittenRepoModel, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| self.map_sqlx_error(e, "create_kitten"))?;

        let row = sqlx::query_as::<_, KittenRow>(INSERT_KITTEN)
            .bind(&kitten.name)
            .bind(&kitten.description)
            .bind(kitten.breed.as_str())
            .bind(kitten.age)
            .bind(kitten.color.as_str())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| self.map_sqlx_error(e, "create_kitten"))?;

        tx.commit()
            .await
            .map_err(|e| self.map_sqlx_error(e, "create_kitten"))?;

        debug!("Created kitten with ID: {}", row.id);
        KittenRepoModel::try_from(row)
    }

    async fn get_by_id(&self, id: i64) -> Result<KittenRepoModel, RepositoryError> {
        let row = sqlx::query_as::<_, KittenRow>(SELECT_KITTEN)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| self.map_sqlx_error(e, "get_kitten_by_id"))?;

        match row {
            Some(row) => KittenRepoModel::try_from(row),
            None => {
                debug!("Kitten {} not found", id);
                Err(RepositoryError::NotFound(format!(
                    "Kitten with ID {} not found",
                    id
                )))
            }
        }
    }

    async fn list_summaries(
        &self,
        breed: Option<Breed>,
    ) -> Result<Vec<KittenSummary>, RepositoryError> {
        let summaries = sqlx::query_as::<_, KittenSummary>(LIST_SUMMARIES)
            .bind(breed.map(|breed| breed.as_str()))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| self.map_sqlx_error(e, "list_kitten_summaries"))?;

        debug!("Listed {} kitten summaries", summaries.len());
        Ok(summaries)
    }

    async fn update(&self, kitten: KittenRepoModel) -> Result<KittenRepoModel, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| self.map_sqlx_error(e, "update_kitten"))?;

        let row = sqlx::query_as::<_, KittenRow>(UPDATE_KITTEN)
            .bind(kitten.id)
            .bind(&kitten.name)
            .bind(&kitten.description)
            .bind(kitten.breed.as_str())
            .bind(kitten.age)
            .bind(kitten.color.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| self.map_sqlx_error(e, "update_kitten"))?
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Kitten with ID {} not found", kitten.id))
            })?;

        tx.commit()
            .await
            .map_err(|e| self.map_sqlx_error(e, "update_kitten"))?;

        debug!("Updated kitten with ID: {}", row.id);
        KittenRepoModel::try_from(row)
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| self.map_sqlx_error(e, "delete_kitten"))?;

        let result = sqlx::query(DELETE_KITTEN)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| self.map_sqlx_error(e, "delete_kitten"))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "Kitten with ID {} not found",
                id
            )));
        }

        tx.commit()
            .await
            .map_err(|e| self.map_sqlx_error(e, "delete_kitten"))?;

        debug!("Deleted kitten with ID: {}", id);
        Ok(())
    }

    async fn exists_by_name(
        &self,
        name: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(NAME_EXISTS)
            .bind(name)
            .bind(exclude_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| self.map_sqlx_error(e, "kitten_name_exists"))
    }
}

//! Application state initialization
//!
//! Builds the kitten repository selected by the configuration and wraps it in the
//! application state shared by every worker.
use crate::{
    config::{RepositoryStorageType, ServerConfig},
    models::DefaultAppState,
    repositories::{KittenRepositoryStorage, PostgresKittenRepository},
};
use actix_web::web;
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use log::{info, warn};
use std::sync::Arc;

/// Creates the kitten repository for the configured storage type.
///
/// # Errors
///
/// Returns error if Postgres storage is selected without database settings or the
/// connection pool cannot be opened.
pub async fn initialize_repositories(config: &ServerConfig) -> Result<KittenRepositoryStorage> {
    match config.repository_storage_type {
        RepositoryStorageType::InMemory => {
            warn!("Using in-memory kitten storage; records are lost on restart");
            Ok(KittenRepositoryStorage::new_in_memory())
        }
        RepositoryStorageType::Postgres => {
            let database = config
                .database
                .as_ref()
                .ok_or_else(|| eyre!("Postgres storage selected without database settings"))?;

            let repository = PostgresKittenRepository::connect(
                database.connect_options(),
                config.db_max_connections,
            )
            .await
            .wrap_err("Failed to initialize Postgres kitten repository")?;

            info!("Using Postgres kitten storage at {}", database.redacted_url());
            Ok(KittenRepositoryStorage::Postgres(repository))
        }
    }
}

/// Initializes application state
///
/// # Errors
///
/// Returns error if the repository cannot be initialized.
pub async fn initialize_app_state(config: &ServerConfig) -> Result<web::ThinData<DefaultAppState>> {
    let kitten_repository = Arc::new(initialize_repositories(config).await?);
    Ok(web::ThinData(DefaultAppState::new(kitten_repository)))
}

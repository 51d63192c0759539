use std::sync::Arc;

use actix_web::web::ThinData;

use crate::repositories::{KittenRepository, KittenRepositoryStorage};

/// Shared handles injected into every request.
///
/// The repository wraps the store's connection pool; each operation acquires a
/// connection from it for the duration of its unit of work.
#[derive(Debug)]
pub struct AppState<KR: KittenRepository> {
    pub kitten_repository: Arc<KR>,
}

impl<KR: KittenRepository> Clone for AppState<KR> {
    fn clone(&self) -> Self {
        Self {
            kitten_repository: Arc::clone(&self.kitten_repository),
        }
    }
}

impl<KR: KittenRepository> AppState<KR> {
    pub fn new(kitten_repository: Arc<KR>) -> Self {
        Self { kitten_repository }
    }

    pub fn kitten_repository(&self) -> Arc<KR> {
        Arc::clone(&self.kitten_repository)
    }
}

pub type DefaultAppState = AppState<KittenRepositoryStorage>;

pub type ThinDataAppState<KR> = ThinData<AppState<KR>>;

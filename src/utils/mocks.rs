#[cfg(test)]
pub mod mockutils {
    use std::sync::Arc;

    use crate::{
        config::{RepositoryStorageType, ServerConfig},
        models::{AppState, Breed, Color, KittenRepoModel, NewKitten},
        repositories::{KittenRepository, KittenRepositoryStorage, MockKittenRepository},
    };

    pub fn create_mock_new_kitten(name: &str) -> NewKitten {
        NewKitten {
            name: name.to_string(),
            description: "Curious".to_string(),
            breed: Breed::Bengal,
            age: 2,
            color: Color::Orange,
        }
    }

    pub fn create_mock_kitten(id: i64, name: &str) -> KittenRepoModel {
        KittenRepoModel::from_new(id, create_mock_new_kitten(name))
    }

    /// App state over an in-memory repository seeded with `kittens`, in order.
    pub async fn create_mock_app_state(
        kittens: Option<Vec<NewKitten>>,
    ) -> AppState<KittenRepositoryStorage> {
        let kitten_repository = Arc::new(KittenRepositoryStorage::new_in_memory());
        if let Some(kittens) = kittens {
            for kitten in kittens {
                kitten_repository.create(kitten).await.unwrap();
            }
        }

        AppState::new(kitten_repository)
    }

    pub fn create_mock_repo_app_state(
        repository: MockKittenRepository,
    ) -> AppState<MockKittenRepository> {
        AppState::new(Arc::new(repository))
    }

    pub fn create_test_server_config(storage_type: RepositoryStorageType) -> ServerConfig {
        ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
            repository_storage_type: storage_type,
            database: None,
            db_max_connections: 5,
            enable_swagger: false,
            secret_key: None,
        }
    }
}

use thiserror::Error;

use crate::{
    constants::{KITTEN_NAME_TAKEN_MESSAGE, KITTEN_NOT_FOUND_MESSAGE},
    models::{ApiError, KittenValidationError, RepositoryError},
};

#[derive(Error, Debug)]
pub enum KittenServiceError {
    #[error(transparent)]
    Validation(#[from] KittenValidationError),

    #[error("Kitten {0} not found")]
    NotFound(i64),

    #[error("Kitten name {0} is already taken")]
    NameTaken(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl From<KittenServiceError> for ApiError {
    fn from(error: KittenServiceError) -> Self {
        match error {
            KittenServiceError::Validation(err) => err.into(),
            KittenServiceError::NotFound(_) => {
                ApiError::NotFound(KITTEN_NOT_FOUND_MESSAGE.to_string())
            }
            KittenServiceError::NameTaken(_) => {
                ApiError::Conflict(KITTEN_NAME_TAKEN_MESSAGE.to_string())
            }
            KittenServiceError::Repository(err) => err.into(),
        }
    }
}

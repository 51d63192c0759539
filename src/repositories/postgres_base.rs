//! Base PostgreSQL repository functionality.
//!
//! Maps `sqlx` failures onto [`RepositoryError`] so that every Postgres-backed repository
//! reports store problems the same way.

use crate::models::RepositoryError;
use log::{error, warn};

/// Base trait for PostgreSQL repositories providing common functionality
pub trait PostgresRepository {
    /// Convert sqlx errors to appropriate RepositoryError types
    fn map_sqlx_error(&self, error: sqlx::Error, context: &str) -> RepositoryError {
        match &error {
            sqlx::Error::RowNotFound => {
                RepositoryError::NotFound(format!("No row returned in operation '{}'", context))
            }
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                warn!(
                    "Unique constraint violated in operation '{}': {}",
                    context, db_error
                );
                RepositoryError::ConstraintViolation(db_error.message().to_string())
            }
            sqlx::Error::Database(db_error) => {
                error!("Database error in operation '{}': {}", context, db_error);
                RepositoryError::TransactionFailure(format!(
                    "Database error in operation '{}': {}",
                    context, db_error
                ))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                error!("Connection pool unavailable in operation '{}'", context);
                RepositoryError::ConnectionError(format!(
                    "Connection pool unavailable in operation '{}'",
                    context
                ))
            }
            sqlx::Error::Io(e) => {
                error!("I/O error in operation '{}': {}", context, e);
                RepositoryError::ConnectionError(format!(
                    "I/O error in operation '{}': {}",
                    context, e
                ))
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
                error!("Failed to decode row in operation '{}': {}", context, error);
                RepositoryError::InvalidData(format!(
                    "Failed to decode row in operation '{}': {}",
                    context, error
                ))
            }
            _ => {
                error!("Postgres operation '{}' failed: {}", context, error);
                RepositoryError::Unknown(format!(
                    "Postgres operation '{}' failed: {}",
                    context, error
                ))
            }
        }
    }
}

//! Repository error types.

use thiserror::Error;

use domain::DomainError;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// No entity with the given id exists.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entity with the given id already exists.
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: &'static str, id: String },

    /// Stored state failed domain validation during rehydration.
    #[error("Invalid stored {entity} {id}: {source}")]
    Invalid {
        entity: &'static str,
        id: String,
        #[source]
        source: DomainError,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

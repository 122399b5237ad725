//! Core repository trait.

use async_trait::async_trait;

use crate::Result;

/// CRUD repository over one entity type.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// The identifier type used for lookups.
    type Id: Send + Sync;

    /// Persists a new entity.
    ///
    /// Fails with [`RepositoryError::Duplicate`](crate::RepositoryError) if
    /// an entity with the same id already exists.
    async fn create(&self, entity: &T) -> Result<()>;

    /// Updates an existing entity.
    ///
    /// Fails with [`RepositoryError::NotFound`](crate::RepositoryError) if
    /// the entity does not exist.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Finds an entity by id.
    async fn find(&self, id: Self::Id) -> Result<T>;

    /// Returns all stored entities.
    async fn find_all(&self) -> Result<Vec<T>>;
}

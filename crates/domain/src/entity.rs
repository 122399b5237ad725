//! Entity trait shared by the domain model.

use std::fmt::Display;
use std::hash::Hash;

/// Trait for identified domain entities.
///
/// Gives the persistence layer a uniform way to key entities without
/// knowing their concrete shape.
pub trait Entity {
    /// The identifier type for this entity.
    type Id: Copy + Eq + Hash + Display + Send + Sync;

    /// Returns the entity's unique identifier.
    fn id(&self) -> Self::Id;

    /// Returns the entity type name, used in error messages and storage
    /// organization.
    fn entity_type() -> &'static str;
}

//! Product entity and related types.

mod entity;
mod factory;
mod handlers;

pub use entity::Product;
pub use factory::ProductFactory;
pub use handlers::SendEmailWhenProductIsCreated;

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductError {
    /// Name is required.
    #[error("Name is required")]
    NameRequired,

    /// Price must be greater than zero.
    #[error("Price must be greater than zero")]
    InvalidPrice,
}

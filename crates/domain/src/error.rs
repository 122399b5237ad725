//! Domain error types.

use thiserror::Error;

use crate::customer::CustomerError;
use crate::order::OrderError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the customer model.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// An error occurred in the product model.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An error occurred in the order model.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}

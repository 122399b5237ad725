//! Order entity and related types.

mod entity;
mod factory;
mod service;

pub use entity::{Order, OrderItem};
pub use factory::OrderFactory;
pub use service::OrderService;

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Item name is required.
    #[error("Item name is required")]
    ItemNameRequired,

    /// Item quantity must be greater than zero.
    #[error("Invalid quantity: {quantity} (must be greater than 0)")]
    InvalidQuantity { quantity: u32 },

    /// Item price must be greater than zero.
    #[error("Invalid price: {price} (must be greater than 0)")]
    InvalidPrice { price: i64 },

    /// Order must have at least one item.
    #[error("Order has no items")]
    NoItems,
}

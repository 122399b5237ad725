//! Shared identifier types used across the domain and persistence crates.

pub mod types;

pub use types::{CustomerId, OrderId, OrderItemId, ProductId};

//! Domain layer: customers, products, and orders.
//!
//! This crate provides:
//! - Entities (`Customer`, `Product`, `Order`) and value objects
//!   (`Address`, `Money`) with construction-time validation
//! - The [`DomainEvent`] tagged union and its payload types, dispatched
//!   through the `dispatcher` crate
//! - Concrete event handlers performing messaging side effects
//! - Factories and the [`OrderService`] application service

pub mod customer;
pub mod entity;
pub mod error;
pub mod event;
pub mod money;
pub mod order;
pub mod product;

pub use customer::{
    Address, Customer, CustomerError, CustomerFactory, SendFirstCustomerCreatedMessage,
    SendMessageWhenCustomerAddressChanged, SendSecondCustomerCreatedMessage,
};
pub use entity::Entity;
pub use error::DomainError;
pub use event::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, DomainEvent, ProductCreatedEvent,
};
pub use money::Money;
pub use order::{Order, OrderError, OrderFactory, OrderItem, OrderService};
pub use product::{Product, ProductError, ProductFactory, SendEmailWhenProductIsCreated};

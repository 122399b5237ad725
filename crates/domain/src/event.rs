//! Domain events.
//!
//! All events the domain produces are variants of the [`DomainEvent`]
//! tagged union. Each variant carries its own payload struct and maps to
//! one fixed event-type name, which the dispatcher uses as its registry
//! key.

use chrono::{DateTime, Utc};
use common::CustomerId;
use dispatcher::Event;
use serde::{Deserialize, Serialize};

use crate::customer::{Address, Customer};
use crate::entity::Entity;
use crate::money::Money;

/// Events that can occur in the domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DomainEvent {
    /// A customer was created.
    CustomerCreated(CustomerCreatedEvent),

    /// A customer's address was changed.
    CustomerAddressChanged(CustomerAddressChangedEvent),

    /// A product was created.
    ProductCreated(ProductCreatedEvent),
}

impl Event for DomainEvent {
    fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::CustomerCreated(_) => "CustomerCreatedEvent",
            DomainEvent::CustomerAddressChanged(_) => "CustomerAddressChangedEvent",
            DomainEvent::ProductCreated(_) => "ProductCreatedEvent",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            DomainEvent::CustomerCreated(e) => e.occurred_at,
            DomainEvent::CustomerAddressChanged(e) => e.occurred_at,
            DomainEvent::ProductCreated(e) => e.occurred_at,
        }
    }
}

/// Payload for [`DomainEvent::CustomerCreated`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreatedEvent {
    /// When the customer was created.
    pub occurred_at: DateTime<Utc>,

    /// The new customer's ID.
    pub customer_id: CustomerId,

    /// The new customer's name.
    pub name: String,
}

impl CustomerCreatedEvent {
    /// Creates the event for a freshly created customer.
    pub fn new(customer: &Customer) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer_id: customer.id(),
            name: customer.name().to_string(),
        }
    }
}

/// Payload for [`DomainEvent::CustomerAddressChanged`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerAddressChangedEvent {
    /// When the address changed.
    pub occurred_at: DateTime<Utc>,

    /// The customer whose address changed.
    pub customer_id: CustomerId,

    /// The customer's name.
    pub name: String,

    /// The new address.
    pub address: Address,
}

impl CustomerAddressChangedEvent {
    /// Creates the event for an address change.
    pub fn new(customer_id: CustomerId, name: impl Into<String>, address: Address) -> Self {
        Self {
            occurred_at: Utc::now(),
            customer_id,
            name: name.into(),
            address,
        }
    }
}

/// Payload for [`DomainEvent::ProductCreated`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreatedEvent {
    /// When the product was created.
    pub occurred_at: DateTime<Utc>,

    /// The new product's name.
    pub name: String,

    /// A short description of the product.
    pub description: String,

    /// The product's price.
    pub price: Money,
}

impl ProductCreatedEvent {
    /// Creates the event for a freshly created product.
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        Self {
            occurred_at: Utc::now(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

impl From<CustomerCreatedEvent> for DomainEvent {
    fn from(event: CustomerCreatedEvent) -> Self {
        DomainEvent::CustomerCreated(event)
    }
}

impl From<CustomerAddressChangedEvent> for DomainEvent {
    fn from(event: CustomerAddressChangedEvent) -> Self {
        DomainEvent::CustomerAddressChanged(event)
    }
}

impl From<ProductCreatedEvent> for DomainEvent {
    fn from(event: ProductCreatedEvent) -> Self {
        DomainEvent::ProductCreated(event)
    }
}

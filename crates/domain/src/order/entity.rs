//! Order entity and line items.

use common::{CustomerId, OrderId, OrderItemId, ProductId};

use crate::entity::Entity;
use crate::money::Money;

use super::OrderError;

/// A line item within an order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    id: OrderItemId,
    product_id: ProductId,
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl OrderItem {
    /// Creates a validated order item.
    pub fn new(
        id: OrderItemId,
        product_id: ProductId,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> Result<Self, OrderError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrderError::ItemNameRequired);
        }
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity { quantity });
        }
        if !unit_price.is_positive() {
            return Err(OrderError::InvalidPrice {
                price: unit_price.cents(),
            });
        }
        Ok(Self {
            id,
            product_id,
            name,
            unit_price,
            quantity,
        })
    }

    /// Returns the item's identifier.
    pub fn id(&self) -> OrderItemId {
        self.id
    }

    /// Returns the product this item refers to.
    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    /// Returns the product name captured at order time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the price per unit.
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Returns the ordered quantity.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total price for this item (quantity * unit_price).
    pub fn total(&self) -> Money {
        self.unit_price.multiply(self.quantity)
    }
}

/// Order entity.
///
/// An order always belongs to one customer and carries at least one item.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }

    fn entity_type() -> &'static str {
        "Order"
    }
}

impl Order {
    /// Creates a new order. At least one item is required.
    pub fn new(
        id: OrderId,
        customer_id: CustomerId,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }
        Ok(Self {
            id,
            customer_id,
            items,
        })
    }

    /// Returns the customer who placed the order.
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the order's items.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the total amount across all items.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |acc, item| acc + item.total())
    }

    /// Replaces the order's items. At least one item is required.
    pub fn replace_items(&mut self, items: Vec<OrderItem>) -> Result<(), OrderError> {
        if items.is_empty() {
            return Err(OrderError::NoItems);
        }
        self.items = items;
        Ok(())
    }
}

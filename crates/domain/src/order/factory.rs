//! Order factory.

use common::{CustomerId, OrderId};

use super::{Order, OrderError, OrderItem};

/// Creates orders with generated identifiers.
pub struct OrderFactory;

impl OrderFactory {
    /// Creates a new order for a customer.
    pub fn create(customer_id: CustomerId, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        Order::new(OrderId::new(), customer_id, items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;
    use crate::money::Money;
    use common::{OrderItemId, ProductId};

    #[test]
    fn create_generates_distinct_ids() {
        let items = || {
            vec![
                OrderItem::new(
                    OrderItemId::new(),
                    ProductId::new(),
                    "Product 1",
                    Money::from_cents(1000),
                    1,
                )
                .unwrap(),
            ]
        };
        let a = OrderFactory::create(CustomerId::new(), items()).unwrap();
        let b = OrderFactory::create(CustomerId::new(), items()).unwrap();
        assert_ne!(a.id(), b.id());
    }
}

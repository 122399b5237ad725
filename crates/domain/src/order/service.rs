//! Order service providing a simplified API for order operations.

use crate::customer::Customer;
use crate::entity::Entity;
use crate::error::DomainError;
use crate::money::Money;

use super::{Order, OrderFactory, OrderItem};

/// Service for order-level operations that span entities.
pub struct OrderService;

impl OrderService {
    /// Places an order for a customer and awards reward points worth half
    /// the order total.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(
        customer: &mut Customer,
        items: Vec<OrderItem>,
    ) -> Result<Order, DomainError> {
        let order = OrderFactory::create(customer.id(), items)?;
        let points = (order.total().cents() / 2).max(0) as u64;
        customer.add_reward_points(points);

        tracing::info!(
            order_id = %order.id(),
            total = %order.total(),
            reward_points = points,
            "order placed"
        );
        Ok(order)
    }

    /// Returns the combined total of a set of orders.
    pub fn total(orders: &[Order]) -> Money {
        orders
            .iter()
            .fold(Money::zero(), |acc, order| acc + order.total())
    }
}

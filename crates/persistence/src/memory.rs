//! In-memory repository for testing.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::Entity;

use crate::error::RepositoryError;
use crate::repository::Repository;
use crate::Result;

/// In-memory repository implementation for testing.
///
/// Stores clones of entities in a map keyed by their id and provides the
/// same interface as the PostgreSQL implementations.
#[derive(Clone)]
pub struct InMemoryRepository<T: Entity> {
    items: Arc<RwLock<HashMap<T::Id, T>>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the number of stored entities.
    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Removes all stored entities.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Entity + Clone + Send + Sync,
{
    type Id = T::Id;

    async fn create(&self, entity: &T) -> Result<()> {
        let mut items = self.items.write().await;
        if items.contains_key(&entity.id()) {
            return Err(RepositoryError::Duplicate {
                entity: T::entity_type(),
                id: entity.id().to_string(),
            });
        }
        items.insert(entity.id(), entity.clone());
        Ok(())
    }

    async fn update(&self, entity: &T) -> Result<()> {
        let mut items = self.items.write().await;
        match items.get_mut(&entity.id()) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity: T::entity_type(),
                id: entity.id().to_string(),
            }),
        }
    }

    async fn find(&self, id: T::Id) -> Result<T> {
        let items = self.items.read().await;
        items
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity: T::entity_type(),
                id: id.to_string(),
            })
    }

    async fn find_all(&self) -> Result<Vec<T>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CustomerId, OrderItemId, ProductId};
    use domain::{
        Address, Customer, CustomerFactory, Money, Order, OrderFactory, OrderItem, Product,
        ProductFactory,
    };

    #[tokio::test]
    async fn create_and_find_a_customer() {
        let repository = InMemoryRepository::<Customer>::new();
        let customer = CustomerFactory::create("Customer 1").unwrap();

        repository.create(&customer).await.unwrap();

        let found = repository.find(customer.id()).await.unwrap();
        assert_eq!(found, customer);
    }

    #[tokio::test]
    async fn create_rejects_duplicates() {
        let repository = InMemoryRepository::<Customer>::new();
        let customer = CustomerFactory::create("Customer 1").unwrap();

        repository.create(&customer).await.unwrap();
        let result = repository.create(&customer).await;
        assert!(matches!(result, Err(RepositoryError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn update_replaces_stored_state() {
        let repository = InMemoryRepository::<Customer>::new();
        let mut customer = CustomerFactory::create("Customer 1").unwrap();
        repository.create(&customer).await.unwrap();

        let address = Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap();
        customer.change_address(address);
        customer.activate().unwrap();
        repository.update(&customer).await.unwrap();

        let found = repository.find(customer.id()).await.unwrap();
        assert!(found.is_active());
        assert_eq!(found.address().unwrap().street(), "Street 1");
    }

    #[tokio::test]
    async fn update_missing_entity_is_not_found() {
        let repository = InMemoryRepository::<Product>::new();
        let product = ProductFactory::create("Product 1", Money::from_cents(1000)).unwrap();

        let result = repository.update(&product).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn find_missing_entity_is_not_found() {
        let repository = InMemoryRepository::<Customer>::new();
        let result = repository.find(CustomerId::new()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn find_all_returns_every_entity() {
        let repository = InMemoryRepository::<Product>::new();
        let a = ProductFactory::create("Product 1", Money::from_cents(1000)).unwrap();
        let b = ProductFactory::create("Product 2", Money::from_cents(2000)).unwrap();
        repository.create(&a).await.unwrap();
        repository.create(&b).await.unwrap();

        let all = repository.find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(repository.count().await, 2);
    }

    #[tokio::test]
    async fn orders_round_trip() {
        let repository = InMemoryRepository::<Order>::new();
        let item = OrderItem::new(
            OrderItemId::new(),
            ProductId::new(),
            "Product 1",
            Money::from_cents(1000),
            2,
        )
        .unwrap();
        let order = OrderFactory::create(CustomerId::new(), vec![item]).unwrap();

        repository.create(&order).await.unwrap();
        let found = repository.find(order.id()).await.unwrap();
        assert_eq!(found.total().cents(), 2000);
    }
}

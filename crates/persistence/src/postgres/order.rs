//! PostgreSQL order repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use common::{CustomerId, OrderId, OrderItemId, ProductId};
use domain::{DomainError, Entity, Money, Order, OrderItem};

use crate::Result;
use crate::error::RepositoryError;
use crate::repository::Repository;

/// PostgreSQL-backed order repository.
///
/// Orders span two tables: `orders` and its child `order_items`. The cached
/// `total_cents` column is recomputed from the entity on every write.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_items(&self, order_id: OrderId) -> Result<Vec<OrderItem>> {
        let rows = sqlx::query(
            "SELECT id, product_id, name, unit_price_cents, quantity \
             FROM order_items WHERE order_id = $1 ORDER BY id",
        )
        .bind(order_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row_to_item(order_id, row))
            .collect()
    }
}

fn invalid(id: OrderId, source: DomainError) -> RepositoryError {
    RepositoryError::Invalid {
        entity: Order::entity_type(),
        id: id.to_string(),
        source,
    }
}

fn not_found(id: OrderId) -> RepositoryError {
    RepositoryError::NotFound {
        entity: Order::entity_type(),
        id: id.to_string(),
    }
}

fn row_to_item(order_id: OrderId, row: PgRow) -> Result<OrderItem> {
    let id = OrderItemId::from_uuid(row.try_get::<Uuid, _>("id")?);
    let product_id = ProductId::from_uuid(row.try_get::<Uuid, _>("product_id")?);
    let name: String = row.try_get("name")?;
    let unit_price_cents: i64 = row.try_get("unit_price_cents")?;
    let quantity: i32 = row.try_get("quantity")?;

    OrderItem::new(
        id,
        product_id,
        name,
        Money::from_cents(unit_price_cents),
        quantity.max(0) as u32,
    )
    .map_err(|e| invalid(order_id, e.into()))
}

#[async_trait]
impl Repository<Order> for PostgresOrderRepository {
    type Id = OrderId;

    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id()))]
    async fn create(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total_cents) VALUES ($1, $2, $3)")
            .bind(entity.id().as_uuid())
            .bind(entity.customer_id().as_uuid())
            .bind(entity.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Duplicate {
                        entity: Order::entity_type(),
                        id: entity.id().to_string(),
                    };
                }
                RepositoryError::Database(e)
            })?;

        for item in entity.items() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, unit_price_cents, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(item.id().as_uuid())
            .bind(entity.id().as_uuid())
            .bind(item.product_id().as_uuid())
            .bind(item.name())
            .bind(item.unit_price().cents())
            .bind(item.quantity() as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(order_id = %entity.id()))]
    async fn update(&self, entity: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        // Remove items that are no longer on the order.
        let kept_ids: Vec<Uuid> = entity.items().iter().map(|i| i.id().as_uuid()).collect();
        sqlx::query("DELETE FROM order_items WHERE order_id = $1 AND id <> ALL($2)")
            .bind(entity.id().as_uuid())
            .bind(&kept_ids)
            .execute(&mut *tx)
            .await?;

        // Upsert the current items.
        for item in entity.items() {
            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, unit_price_cents, quantity)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (id) DO UPDATE
                SET product_id = EXCLUDED.product_id,
                    name = EXCLUDED.name,
                    unit_price_cents = EXCLUDED.unit_price_cents,
                    quantity = EXCLUDED.quantity
                "#,
            )
            .bind(item.id().as_uuid())
            .bind(entity.id().as_uuid())
            .bind(item.product_id().as_uuid())
            .bind(item.name())
            .bind(item.unit_price().cents())
            .bind(item.quantity() as i32)
            .execute(&mut *tx)
            .await?;
        }

        // Refresh the order row and its cached total.
        let result =
            sqlx::query("UPDATE orders SET customer_id = $2, total_cents = $3 WHERE id = $1")
                .bind(entity.id().as_uuid())
                .bind(entity.customer_id().as_uuid())
                .bind(entity.total().cents())
                .execute(&mut *tx)
                .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(entity.id()));
        }

        tx.commit().await?;
        Ok(())
    }

    async fn find(&self, id: OrderId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Err(not_found(id));
        };

        let customer_id = CustomerId::from_uuid(row.try_get::<Uuid, _>("customer_id")?);
        let items = self.load_items(id).await?;

        Order::new(id, customer_id, items).map_err(|e| invalid(id, e.into()))
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query("SELECT id, customer_id FROM orders")
            .fetch_all(&self.pool)
            .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in rows {
            let id = OrderId::from_uuid(row.try_get::<Uuid, _>("id")?);
            let customer_id = CustomerId::from_uuid(row.try_get::<Uuid, _>("customer_id")?);
            let items = self.load_items(id).await?;
            orders.push(Order::new(id, customer_id, items).map_err(|e| invalid(id, e.into()))?);
        }
        Ok(orders)
    }
}

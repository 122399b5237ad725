//! PostgreSQL product repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use common::ProductId;
use domain::{DomainError, Entity, Money, Product};

use crate::Result;
use crate::error::RepositoryError;
use crate::repository::Repository;

/// PostgreSQL-backed product repository.
#[derive(Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn not_found(id: ProductId) -> RepositoryError {
    RepositoryError::NotFound {
        entity: Product::entity_type(),
        id: id.to_string(),
    }
}

fn row_to_product(row: PgRow) -> Result<Product> {
    let id = ProductId::from_uuid(row.try_get::<Uuid, _>("id")?);
    let name: String = row.try_get("name")?;
    let price_cents: i64 = row.try_get("price_cents")?;

    Product::new(id, name, Money::from_cents(price_cents)).map_err(|e| {
        RepositoryError::Invalid {
            entity: Product::entity_type(),
            id: id.to_string(),
            source: DomainError::from(e),
        }
    })
}

#[async_trait]
impl Repository<Product> for PostgresProductRepository {
    type Id = ProductId;

    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn create(&self, entity: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price_cents) VALUES ($1, $2, $3)")
            .bind(entity.id().as_uuid())
            .bind(entity.name())
            .bind(entity.price().cents())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Duplicate {
                        entity: Product::entity_type(),
                        id: entity.id().to_string(),
                    };
                }
                RepositoryError::Database(e)
            })?;
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(product_id = %entity.id()))]
    async fn update(&self, entity: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price_cents = $3 WHERE id = $1")
            .bind(entity.id().as_uuid())
            .bind(entity.name())
            .bind(entity.price().cents())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(entity.id()));
        }
        Ok(())
    }

    async fn find(&self, id: ProductId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price_cents FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => row_to_product(row),
            None => Err(not_found(id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price_cents FROM products ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(row_to_product).collect()
    }
}

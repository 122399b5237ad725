//! PostgreSQL customer repository.

use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use common::CustomerId;
use domain::{Address, Customer, DomainError, Entity};

use crate::Result;
use crate::error::RepositoryError;
use crate::repository::Repository;

/// PostgreSQL-backed customer repository.
#[derive(Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// Creates a new customer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn invalid(id: CustomerId, source: DomainError) -> RepositoryError {
    RepositoryError::Invalid {
        entity: Customer::entity_type(),
        id: id.to_string(),
        source,
    }
}

fn not_found(id: CustomerId) -> RepositoryError {
    RepositoryError::NotFound {
        entity: Customer::entity_type(),
        id: id.to_string(),
    }
}

fn row_to_customer(row: PgRow) -> Result<Customer> {
    let id = CustomerId::from_uuid(row.try_get::<Uuid, _>("id")?);
    let name: String = row.try_get("name")?;
    let street: Option<String> = row.try_get("street")?;
    let number: Option<i32> = row.try_get("number")?;
    let zip: Option<String> = row.try_get("zip")?;
    let city: Option<String> = row.try_get("city")?;
    let active: bool = row.try_get("active")?;
    let reward_points: i64 = row.try_get("reward_points")?;

    let address = match (street, number, zip, city) {
        (Some(street), Some(number), Some(zip), Some(city)) => Some(
            Address::new(street, number.max(0) as u32, zip, city)
                .map_err(|e| invalid(id, e.into()))?,
        ),
        _ => None,
    };

    Customer::from_parts(id, name, address, active, reward_points.max(0) as u64)
        .map_err(|e| invalid(id, e.into()))
}

#[async_trait]
impl Repository<Customer> for PostgresCustomerRepository {
    type Id = CustomerId;

    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn create(&self, entity: &Customer) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zip, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entity.id().as_uuid())
        .bind(entity.name())
        .bind(entity.address().map(Address::street))
        .bind(entity.address().map(|a| a.number() as i32))
        .bind(entity.address().map(Address::zip))
        .bind(entity.address().map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points() as i64)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Duplicate {
                    entity: Customer::entity_type(),
                    id: entity.id().to_string(),
                };
            }
            RepositoryError::Database(e)
        })?;
        Ok(())
    }

    #[tracing::instrument(skip(self, entity), fields(customer_id = %entity.id()))]
    async fn update(&self, entity: &Customer) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zip = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(entity.id().as_uuid())
        .bind(entity.name())
        .bind(entity.address().map(Address::street))
        .bind(entity.address().map(|a| a.number() as i32))
        .bind(entity.address().map(Address::zip))
        .bind(entity.address().map(Address::city))
        .bind(entity.is_active())
        .bind(entity.reward_points() as i64)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(entity.id()));
        }
        Ok(())
    }

    async fn find(&self, id: CustomerId) -> Result<Customer> {
        let row = sqlx::query(
            "SELECT id, name, street, number, zip, city, active, reward_points \
             FROM customers WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row_to_customer(row),
            None => Err(not_found(id)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            "SELECT id, name, street, number, zip, city, active, reward_points \
             FROM customers ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(row_to_customer).collect()
    }
}

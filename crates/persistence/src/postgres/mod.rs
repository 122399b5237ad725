//! PostgreSQL-backed repositories.

mod customer;
mod order;
mod product;

pub use customer::PostgresCustomerRepository;
pub use order::PostgresOrderRepository;
pub use product::PostgresProductRepository;

use sqlx::PgPool;

/// Runs the database migrations.
pub async fn run_migrations(pool: &PgPool) -> std::result::Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}

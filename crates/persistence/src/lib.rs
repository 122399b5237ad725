//! Persistence layer for the domain model.
//!
//! Provides the generic [`Repository`] trait, an in-memory implementation
//! for tests, and PostgreSQL-backed implementations over `sqlx`.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryRepository;
pub use postgres::{
    PostgresCustomerRepository, PostgresOrderRepository, PostgresProductRepository,
    run_migrations,
};
pub use repository::Repository;

//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories translate between Diesel rows and domain records; the
//! schema and row types stay private to this module. Every record carries
//! the encoded [`AncestorKey`](crate::domain::AncestorKey) it was stored
//! under so listings can be scoped to one group.
//!
//! ```ignore
//! use timecard::outbound::persistence::{DbPool, DieselPunchRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/timecard")).await?;
//! let punches = DieselPunchRepository::new(pool);
//! ```

mod diesel_punch_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_punch_repository::DieselPunchRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};

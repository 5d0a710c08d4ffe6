//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs and the table definition stay private to this module; pooled
//! connections come from `bb8` through `diesel-async`.
//!
//! # Example
//!
//! ```ignore
//! use coffee_shop::outbound::persistence::{DbPool, DieselDrinkRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/coffee")).await?;
//! let repo = DieselDrinkRepository::new(pool);
//! ```

mod diesel_drink_repository;
mod diesel_error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_drink_repository::DieselDrinkRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

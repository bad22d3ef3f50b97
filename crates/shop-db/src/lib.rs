//! # shop-db
//!
//! PostgreSQL persistence layer: connection pool, row models, and the
//! repository implementations for the shop-core ports.

pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_lazy_pool, create_pool, create_pool_from_env, DatabaseConfig};
pub use repositories::{PgOrderRepository, PgProductRepository, PgUserRepository};

/// Re-export the sqlx pool type used throughout the workspace
pub use sqlx::PgPool;

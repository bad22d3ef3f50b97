//! Connection pool management

mod postgres;

pub use postgres::{create_lazy_pool, create_pool, create_pool_from_env, DatabaseConfig};

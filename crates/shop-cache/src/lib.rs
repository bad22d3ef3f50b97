//! # shop-cache
//!
//! Redis caching layer: refresh-token session storage and the featured
//! products cache.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: One refresh token per user, TTL-bound
//! - **Catalog Cache**: Featured product list served from Redis when warm

pub mod catalog;
pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export store types
pub use catalog::FeaturedProductsCache;
pub use session::RefreshTokenStore;

//! Featured products cache.
//!
//! The featured product list is read far more often than it changes, so the
//! service layer keeps a JSON snapshot of it in Redis and refreshes the
//! snapshot whenever a product is featured, unfeatured, or deleted. The
//! cache is shape-agnostic: callers pick the serialized representation.

use serde::{de::DeserializeOwned, Serialize};

use crate::pool::{RedisPool, RedisResult};

/// Redis key for the featured products snapshot
const FEATURED_PRODUCTS_KEY: &str = "featured_products";

/// Cache for the featured product list
#[derive(Debug, Clone)]
pub struct FeaturedProductsCache {
    pool: RedisPool,
}

impl FeaturedProductsCache {
    /// Create a new featured products cache
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Get the cached featured list, if warm
    pub async fn get<V: DeserializeOwned>(&self) -> RedisResult<Option<V>> {
        self.pool.get_json(FEATURED_PRODUCTS_KEY).await
    }

    /// Replace the cached featured list (no TTL; invalidated on writes)
    pub async fn set<V: Serialize>(&self, products: &V) -> RedisResult<()> {
        self.pool.set_json(FEATURED_PRODUCTS_KEY, products, None).await?;
        tracing::debug!("Refreshed featured products cache");
        Ok(())
    }

    /// Drop the cached featured list
    pub async fn invalidate(&self) -> RedisResult<bool> {
        self.pool.delete(FEATURED_PRODUCTS_KEY).await
    }
}

//! Service context - dependency container for services
//!
//! Holds the repositories, cache stores, and other dependencies needed by
//! the application services.

use std::sync::Arc;

use shop_cache::{FeaturedProductsCache, RedisPool, RefreshTokenStore};
use shop_common::JwtService;
use shop_core::{OrderRepository, ProductRepository, SessionStore, UserRepository};
use shop_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - Redis cache stores
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: RedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    product_repo: Arc<dyn ProductRepository>,
    order_repo: Arc<dyn OrderRepository>,

    // Cache stores
    refresh_token_store: Arc<dyn SessionStore>,
    featured_cache: FeaturedProductsCache,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        redis_pool: RedisPool,
        user_repo: Arc<dyn UserRepository>,
        product_repo: Arc<dyn ProductRepository>,
        order_repo: Arc<dyn OrderRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        // Stored-token TTL tracks the refresh token's own lifetime
        let refresh_ttl = jwt_service.refresh_token_expiry().max(0) as u64;
        let refresh_token_store: Arc<dyn SessionStore> =
            Arc::new(RefreshTokenStore::with_ttl(redis_pool.clone(), refresh_ttl));
        let featured_cache = FeaturedProductsCache::new(redis_pool.clone());

        Self {
            pool,
            redis_pool,
            user_repo,
            product_repo,
            order_repo,
            refresh_token_store,
            featured_cache,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &RedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the product repository
    pub fn product_repo(&self) -> &dyn ProductRepository {
        self.product_repo.as_ref()
    }

    /// Get the order repository
    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the refresh token store
    pub fn refresh_token_store(&self) -> &dyn SessionStore {
        self.refresh_token_store.as_ref()
    }

    /// Get the featured products cache
    pub fn featured_cache(&self) -> &FeaturedProductsCache {
        &self.featured_cache
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"RedisPool")
            .field("repositories", &"...")
            .field("cache_stores", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<RedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    product_repo: Option<Arc<dyn ProductRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    refresh_token_store: Option<Arc<dyn SessionStore>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            product_repo: None,
            order_repo: None,
            jwt_service: None,
            refresh_token_store: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: RedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn product_repo(mut self, repo: Arc<dyn ProductRepository>) -> Self {
        self.product_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Replace the Redis-backed refresh token store (used by tests to
    /// substitute an in-memory store)
    pub fn refresh_token_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.refresh_token_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        let mut context = ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.product_repo
                .ok_or_else(|| ServiceError::validation("product_repo is required"))?,
            self.order_repo
                .ok_or_else(|| ServiceError::validation("order_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
        );

        if let Some(store) = self.refresh_token_store {
            context.refresh_token_store = store;
        }

        Ok(context)
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

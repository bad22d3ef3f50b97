//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. The order port exposes exactly the
//! aggregation surface the analytics component requires: a global
//! count-and-sum, and per-day grouped totals over a date range.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entities::{Product, User};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Global order totals. Zero-valued when no orders exist.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrderTotals {
    pub total_sales: i64,
    pub total_revenue: f64,
}

/// Grouped per-day order totals as returned by the store. Sparse: days
/// without orders are absent and get filled in by the aggregator.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotal {
    pub day: NaiveDate,
    pub sales: i64,
    pub revenue: f64,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Count all users
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Product Repository
// ============================================================================

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find product by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Product>>;

    /// List every product in the catalog
    async fn find_all(&self) -> RepoResult<Vec<Product>>;

    /// List featured products
    async fn find_featured(&self) -> RepoResult<Vec<Product>>;

    /// List products in a category
    async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Product>>;

    /// Random sample of products for the recommendations endpoint
    async fn sample(&self, limit: i64) -> RepoResult<Vec<Product>>;

    /// Create a new product
    async fn create(&self, product: &Product) -> RepoResult<()>;

    /// Persist the featured flag, returning the updated product
    async fn set_featured(&self, id: Uuid, is_featured: bool) -> RepoResult<Product>;

    /// Delete a product
    async fn delete(&self, id: Uuid) -> RepoResult<()>;

    /// Count all products
    async fn count(&self) -> RepoResult<i64>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Count all orders and sum their amounts; zeros when the table is empty
    async fn count_and_revenue(&self) -> RepoResult<OrderTotals>;

    /// Per-day grouped totals for orders created in `[start, end]`
    /// inclusive (UTC day boundaries), ascending by day. Sparse.
    async fn daily_totals(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<DailyTotal>>;
}

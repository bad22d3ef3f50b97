//! # shop-core
//!
//! Domain layer for the shop server: entities, domain errors, and the
//! repository and store traits (ports) implemented by the infrastructure
//! crates.

pub mod entities;
pub mod error;
pub mod traits;

pub use entities::{DailySales, Product, User, UserRole};
pub use error::DomainError;
pub use traits::{
    DailyTotal, OrderRepository, OrderTotals, ProductRepository, RepoResult, SessionStore,
    UserRepository,
};

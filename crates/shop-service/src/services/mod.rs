//! Application services

mod analytics;
mod auth;
mod context;
mod error;
mod product;

pub use analytics::AnalyticsService;
pub use auth::{AuthService, AuthTokens};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use product::ProductService;

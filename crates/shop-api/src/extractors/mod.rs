//! Custom extractors for request handling

pub mod auth;
pub mod validated;

pub use auth::{AdminUser, AuthUser};
pub use validated::ValidatedJson;

//! Request handlers organized by domain

pub mod analytics;
pub mod auth;
pub mod health;
pub mod products;

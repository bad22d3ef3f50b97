//! Domain entities

mod product;
mod sales;
mod user;

pub use product::Product;
pub use sales::DailySales;
pub use user::{User, UserRole};

//! Repository implementations

mod error;
mod order;
mod product;
mod user;

pub use order::PgOrderRepository;
pub use product::PgProductRepository;
pub use user::PgUserRepository;

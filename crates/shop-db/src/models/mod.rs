//! Database row models

mod order;
mod product;
mod user;

pub use order::{DailyTotalRow, OrderTotalsRow};
pub use product::ProductModel;
pub use user::UserModel;

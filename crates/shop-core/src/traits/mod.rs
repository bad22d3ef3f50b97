//! Repository and store traits (ports)

mod repositories;
mod session;

pub use repositories::{
    DailyTotal, OrderRepository, OrderTotals, ProductRepository, RepoResult, UserRepository,
};
pub use session::SessionStore;

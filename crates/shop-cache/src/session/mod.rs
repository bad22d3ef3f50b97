//! Session storage

mod refresh_token;

pub use refresh_token::RefreshTokenStore;

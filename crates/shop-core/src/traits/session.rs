//! Session store port - one refresh token per user
//!
//! A presented refresh token is only honored while it byte-for-byte equals
//! the stored one, so storing a new token or revoking the key invalidates
//! every token issued before.

use async_trait::async_trait;
use uuid::Uuid;

use super::repositories::RepoResult;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store the user's refresh token, replacing any previous one
    async fn store(&self, user_id: Uuid, token: &str) -> RepoResult<()>;

    /// Check whether the presented token equals the stored one
    async fn matches(&self, user_id: Uuid, presented: &str) -> RepoResult<bool>;

    /// Revoke the stored token, returning whether one existed
    async fn revoke(&self, user_id: Uuid) -> RepoResult<bool>;
}

//! Refresh token storage in Redis.
//!
//! One token per user under `refresh_token:{user_id}`, with a TTL matching
//! the token's own 7-day expiry. A new login plainly overwrites the stored
//! value (last write wins, no locking), which is what gives the system its
//! single-active-session semantics: a refresh token is only usable while it
//! byte-for-byte equals the stored one, so overwriting or deleting the key
//! revokes everything issued before.

use async_trait::async_trait;
use uuid::Uuid;

use shop_core::{DomainError, RepoResult, SessionStore};

use crate::pool::{RedisPool, RedisResult};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Refresh token store for managing authentication sessions
#[derive(Debug, Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store with the default 7-day TTL
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate the Redis key for a user's refresh token
    fn key(user_id: Uuid) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{user_id}")
    }

    /// Store the user's refresh token, replacing any previous one
    pub async fn store(&self, user_id: Uuid, token: &str) -> RedisResult<()> {
        let key = Self::key(user_id);
        self.pool
            .set_string(&key, token, Some(self.ttl_seconds))
            .await?;

        tracing::debug!(user_id = %user_id, "Stored refresh token");

        Ok(())
    }

    /// Get the currently stored refresh token for a user
    pub async fn get(&self, user_id: Uuid) -> RedisResult<Option<String>> {
        let key = Self::key(user_id);
        self.pool.get_string(&key).await
    }

    /// Check whether the presented token byte-for-byte equals the stored one
    pub async fn matches(&self, user_id: Uuid, presented: &str) -> RedisResult<bool> {
        Ok(self
            .get(user_id)
            .await?
            .is_some_and(|stored| stored == presented))
    }

    /// Revoke (delete) the user's refresh token
    pub async fn revoke(&self, user_id: Uuid) -> RedisResult<bool> {
        let key = Self::key(user_id);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!(user_id = %user_id, "Revoked refresh token");
        }

        Ok(deleted)
    }

    /// Get remaining TTL for the user's token
    pub async fn get_ttl(&self, user_id: Uuid) -> RedisResult<Option<i64>> {
        let key = Self::key(user_id);
        self.pool.ttl(&key).await
    }
}

#[async_trait]
impl SessionStore for RefreshTokenStore {
    async fn store(&self, user_id: Uuid, token: &str) -> RepoResult<()> {
        RefreshTokenStore::store(self, user_id, token)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn matches(&self, user_id: Uuid, presented: &str) -> RepoResult<bool> {
        RefreshTokenStore::matches(self, user_id, presented)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }

    async fn revoke(&self, user_id: Uuid) -> RepoResult<bool> {
        RefreshTokenStore::revoke(self, user_id)
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        let id = Uuid::nil();
        let key = RefreshTokenStore::key(id);
        assert_eq!(key, format!("refresh_token:{id}"));
    }

    #[test]
    fn test_default_ttl_is_seven_days() {
        assert_eq!(DEFAULT_REFRESH_TOKEN_TTL, 604_800);
    }
}

//! Authentication service
//!
//! Handles user signup, login, access-token refresh, and logout. Sessions
//! are single-active: each login overwrites the user's stored refresh token,
//! and a presented refresh token is only honored while it equals the stored
//! one byte for byte.

use shop_common::{hash_password, verify_password, AppError, TokenPair};
use shop_core::User;
use tracing::{info, instrument, warn};

use crate::dto::{LoginRequest, SignupRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Token pair plus the cookie lifetimes the API layer needs
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds
    pub access_token_max_age: i64,
    /// Refresh token lifetime in seconds
    pub refresh_token_max_age: i64,
}

impl AuthTokens {
    fn from_pair(pair: TokenPair, ctx: &ServiceContext) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            access_token_max_age: ctx.jwt_service().access_token_expiry(),
            refresh_token_max_age: ctx.jwt_service().refresh_token_expiry(),
        }
    }
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn signup(
        &self,
        request: SignupRequest,
    ) -> ServiceResult<(UserResponse, AuthTokens)> {
        // Check if email already exists before any write
        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::App(AppError::AlreadyExists(
                "User".to_string(),
            )));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let user = User::new(request.name, request.email);
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        let tokens = self.issue_session(&user).await?;

        Ok((UserResponse::from(&user), tokens))
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(
        &self,
        request: LoginRequest,
    ) -> ServiceResult<(UserResponse, AuthTokens)> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(user_id = %user.id, "User logged in successfully");

        let tokens = self.issue_session(&user).await?;

        Ok((UserResponse::from(&user), tokens))
    }

    /// Issue a fresh token pair and overwrite the stored refresh token.
    /// Any session issued earlier stops refreshing (last write wins).
    async fn issue_session(&self, user: &User) -> ServiceResult<AuthTokens> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        self.ctx
            .refresh_token_store()
            .store(user.id, &token_pair.refresh_token)
            .await?;

        Ok(AuthTokens::from_pair(token_pair, self.ctx))
    }

    /// Issue a new access token from a valid refresh token
    ///
    /// The refresh token is not rotated: it stays valid (and stored) until
    /// it expires or the user logs in or out again.
    #[instrument(skip_all)]
    pub async fn refresh_access_token(&self, refresh_token: &str) -> ServiceResult<String> {
        // Validate the token itself (signature, expiry, type)
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(refresh_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // The presented token must match the one currently stored
        let matches = self
            .ctx
            .refresh_token_store()
            .matches(user_id, refresh_token)
            .await?;

        if !matches {
            warn!(user_id = %user_id, "Refresh rejected: token does not match stored session");
            return Err(ServiceError::App(AppError::TokenMismatch));
        }

        let access_token = self
            .ctx
            .jwt_service()
            .generate_access_token(user_id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user_id, "Access token refreshed");

        Ok(access_token)
    }

    /// Logout by revoking the stored refresh token
    ///
    /// Best effort and idempotent: an absent, expired, or malformed token
    /// still results in a successful logout.
    #[instrument(skip_all)]
    pub async fn logout(&self, refresh_token: Option<&str>) -> ServiceResult<()> {
        let Some(token) = refresh_token else {
            return Ok(());
        };

        match self.ctx.jwt_service().validate_refresh_token(token) {
            Ok(claims) => match claims.user_id() {
                Ok(user_id) => {
                    if let Err(e) = self.ctx.refresh_token_store().revoke(user_id).await {
                        warn!(user_id = %user_id, error = %e, "Failed to revoke refresh token");
                    } else {
                        info!(user_id = %user_id, "User logged out");
                    }
                }
                Err(_) => warn!("Logout with unparseable token subject"),
            },
            Err(_) => warn!("Logout with invalid or expired refresh token"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use uuid::Uuid;

    use shop_cache::{RedisPool, RedisPoolConfig};
    use shop_common::JwtService;
    use shop_core::{
        DailyTotal, DomainError, OrderRepository, OrderTotals, Product, ProductRepository,
        RepoResult, SessionStore, UserRepository,
    };
    use shop_db::{create_lazy_pool, DatabaseConfig};

    use crate::services::context::ServiceContextBuilder;

    use super::*;

    #[derive(Default)]
    struct InMemoryUsers {
        rows: Mutex<HashMap<Uuid, (User, String)>>,
    }

    #[async_trait]
    impl UserRepository for InMemoryUsers {
        async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<User>> {
            Ok(self.rows.lock().unwrap().get(&id).map(|(u, _)| u.clone()))
        }

        async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .find(|(u, _)| u.email == email)
                .map(|(u, _)| u.clone()))
        }

        async fn email_exists(&self, email: &str) -> RepoResult<bool> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .values()
                .any(|(u, _)| u.email == email))
        }

        async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
            self.rows
                .lock()
                .unwrap()
                .insert(user.id, (user.clone(), password_hash.to_string()));
            Ok(())
        }

        async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
            Ok(self.rows.lock().unwrap().get(&id).map(|(_, h)| h.clone()))
        }

        async fn count(&self) -> RepoResult<i64> {
            Ok(self.rows.lock().unwrap().len() as i64)
        }
    }

    #[derive(Default)]
    struct InMemorySessions {
        tokens: Mutex<HashMap<Uuid, String>>,
    }

    #[async_trait]
    impl SessionStore for InMemorySessions {
        async fn store(&self, user_id: Uuid, token: &str) -> RepoResult<()> {
            self.tokens
                .lock()
                .unwrap()
                .insert(user_id, token.to_string());
            Ok(())
        }

        async fn matches(&self, user_id: Uuid, presented: &str) -> RepoResult<bool> {
            Ok(self
                .tokens
                .lock()
                .unwrap()
                .get(&user_id)
                .is_some_and(|stored| stored == presented))
        }

        async fn revoke(&self, user_id: Uuid) -> RepoResult<bool> {
            Ok(self.tokens.lock().unwrap().remove(&user_id).is_some())
        }
    }

    struct EmptyCatalog;

    #[async_trait]
    impl ProductRepository for EmptyCatalog {
        async fn find_by_id(&self, _id: Uuid) -> RepoResult<Option<Product>> {
            Ok(None)
        }

        async fn find_all(&self) -> RepoResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn find_featured(&self) -> RepoResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn find_by_category(&self, _category: &str) -> RepoResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn sample(&self, _limit: i64) -> RepoResult<Vec<Product>> {
            Ok(Vec::new())
        }

        async fn create(&self, _product: &Product) -> RepoResult<()> {
            Ok(())
        }

        async fn set_featured(&self, id: Uuid, _is_featured: bool) -> RepoResult<Product> {
            Err(DomainError::ProductNotFound(id))
        }

        async fn delete(&self, _id: Uuid) -> RepoResult<()> {
            Ok(())
        }

        async fn count(&self) -> RepoResult<i64> {
            Ok(0)
        }
    }

    struct NoOrders;

    #[async_trait]
    impl OrderRepository for NoOrders {
        async fn count_and_revenue(&self) -> RepoResult<OrderTotals> {
            Ok(OrderTotals::default())
        }

        async fn daily_totals(
            &self,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> RepoResult<Vec<DailyTotal>> {
            Ok(Vec::new())
        }
    }

    // Pools are built lazily and never touched; the fakes cover everything
    // the auth flows reach.
    fn test_context() -> ServiceContext {
        ServiceContextBuilder::new()
            .pool(create_lazy_pool(&DatabaseConfig::default()).unwrap())
            .redis_pool(RedisPool::new(RedisPoolConfig::default()).unwrap())
            .user_repo(Arc::new(InMemoryUsers::default()))
            .product_repo(Arc::new(EmptyCatalog))
            .order_repo(Arc::new(NoOrders))
            .jwt_service(Arc::new(JwtService::new(
                "test-secret-key-that-is-long-enough",
                900,
                604_800,
            )))
            .refresh_token_store(Arc::new(InMemorySessions::default()))
            .build()
            .unwrap()
    }

    fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_signup_leaves_credentials_untouched() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        service
            .signup(signup_request("Ada", "ada@example.com", "first-password"))
            .await
            .unwrap();

        let err = service
            .signup(signup_request("Eve", "ada@example.com", "second-password"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::AlreadyExists(_))));

        // The original password still authenticates; the rejected one never took
        service
            .login(login_request("ada@example.com", "first-password"))
            .await
            .unwrap();
        let err = service
            .login(login_request("ada@example.com", "second-password"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::App(AppError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_second_login_supersedes_first_session() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let (_, first) = service
            .signup(signup_request("Ada", "ada@example.com", "longenough"))
            .await
            .unwrap();
        let (_, second) = service
            .login(login_request("ada@example.com", "longenough"))
            .await
            .unwrap();
        assert_ne!(first.refresh_token, second.refresh_token);

        let err = service
            .refresh_access_token(&first.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::TokenMismatch)));

        let access = service
            .refresh_access_token(&second.refresh_token)
            .await
            .unwrap();
        assert!(ctx.jwt_service().validate_access_token(&access).is_ok());
    }

    #[tokio::test]
    async fn test_refresh_fails_after_logout() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        let (_, tokens) = service
            .signup(signup_request("Ada", "ada@example.com", "longenough"))
            .await
            .unwrap();

        service
            .refresh_access_token(&tokens.refresh_token)
            .await
            .unwrap();

        service.logout(Some(&tokens.refresh_token)).await.unwrap();

        let err = service
            .refresh_access_token(&tokens.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::TokenMismatch)));
    }

    #[tokio::test]
    async fn test_logout_is_idempotent_and_lenient() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        service.logout(None).await.unwrap();
        service.logout(Some("not-a-jwt")).await.unwrap();

        let (_, tokens) = service
            .signup(signup_request("Ada", "ada@example.com", "longenough"))
            .await
            .unwrap();
        service.logout(Some(&tokens.refresh_token)).await.unwrap();
        service.logout(Some(&tokens.refresh_token)).await.unwrap();
    }

    #[tokio::test]
    async fn test_refresh_rejects_unknown_token() {
        let ctx = test_context();
        let service = AuthService::new(&ctx);

        // A well-formed refresh token for a user with no stored session
        let stray = ctx
            .jwt_service()
            .generate_token_pair(Uuid::new_v4())
            .unwrap();
        let err = service
            .refresh_access_token(&stray.refresh_token)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::App(AppError::TokenMismatch)));
    }
}

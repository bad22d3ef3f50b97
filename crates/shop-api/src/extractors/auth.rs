//! Authentication extractors
//!
//! Resolves the current user from the `accessToken` cookie, falling back to
//! an `Authorization: Bearer` header for non-browser clients. The user row
//! is loaded on every authenticated request so a deleted account stops
//! working immediately, even with a live token.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use shop_common::AppError;
use shop_core::User;

use crate::cookies::ACCESS_TOKEN_COOKIE;
use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user loaded from the database
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

/// Pull the access token from the cookie jar or the Authorization header
fn extract_access_token(parts: &Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(ACCESS_TOKEN_COOKIE) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(ToString::to_string)
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_access_token(parts).ok_or(ApiError::App(AppError::MissingToken))?;

        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(&token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        let user_id = claims.user_id().map_err(ApiError::App)?;

        // Load the user; a valid token for a deleted account is rejected
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Domain)?
            .ok_or_else(|| {
                tracing::warn!(user_id = %user_id, "Token for nonexistent user");
                ApiError::App(AppError::InvalidToken)
            })?;

        Ok(AuthUser { user })
    }
}

/// Authenticated user with the admin role
///
/// Rejects with 403 when the authenticated user is not an admin.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub user: User,
}

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

        if !user.role.is_admin() {
            tracing::warn!(user_id = %user.id, "Admin route denied for non-admin user");
            return Err(ApiError::App(AppError::Forbidden));
        }

        Ok(AdminUser { user })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_headers(builder: axum::http::request::Builder) -> Parts {
        let (parts, ()) = builder.body(()).map(Request::into_parts).unwrap();
        parts
    }

    #[test]
    fn test_token_from_cookie() {
        let parts = parts_with_headers(
            Request::builder().header(header::COOKIE, "accessToken=abc123; other=x"),
        );
        assert_eq!(extract_access_token(&parts).as_deref(), Some("abc123"));
    }

    #[test]
    fn test_token_from_bearer_header() {
        let parts =
            parts_with_headers(Request::builder().header(header::AUTHORIZATION, "Bearer xyz789"));
        assert_eq!(extract_access_token(&parts).as_deref(), Some("xyz789"));
    }

    #[test]
    fn test_cookie_takes_precedence_over_header() {
        let parts = parts_with_headers(
            Request::builder()
                .header(header::COOKIE, "accessToken=from-cookie")
                .header(header::AUTHORIZATION, "Bearer from-header"),
        );
        assert_eq!(extract_access_token(&parts).as_deref(), Some("from-cookie"));
    }

    #[test]
    fn test_no_token() {
        let parts = parts_with_headers(Request::builder());
        assert!(extract_access_token(&parts).is_none());
    }

    #[test]
    fn test_malformed_authorization_header() {
        let parts =
            parts_with_headers(Request::builder().header(header::AUTHORIZATION, "Basic abc"));
        assert!(extract_access_token(&parts).is_none());
    }
}

//! Authentication handlers
//!
//! Endpoints for signup, login, logout, token refresh, and the current
//! user's profile. Tokens travel in HttpOnly cookies; the response bodies
//! carry only the user summary or a status message.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::CookieJar;
use shop_common::AppError;
use shop_service::{AuthService, AuthTokens, LoginRequest, SignupRequest, UserResponse};

use crate::cookies::{
    access_token_cookie, refresh_token_cookie, removal_cookie, ACCESS_TOKEN_COOKIE,
    REFRESH_TOKEN_COOKIE,
};
use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Add both auth cookies to the jar
fn with_auth_cookies(jar: CookieJar, tokens: AuthTokens, secure: bool) -> CookieJar {
    jar.add(access_token_cookie(
        tokens.access_token,
        tokens.access_token_max_age,
        secure,
    ))
    .add(refresh_token_cookie(
        tokens.refresh_token,
        tokens.refresh_token_max_age,
        secure,
    ))
}

/// Register a new user
///
/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<(CookieJar, Created<Json<UserResponse>>)> {
    let service = AuthService::new(state.service_context());
    let (user, tokens) = service.signup(request).await?;

    let jar = with_auth_cookies(jar, tokens, state.is_production());
    Ok((jar, Created(Json(user))))
}

/// Login with email and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<UserResponse>)> {
    let service = AuthService::new(state.service_context());
    let (user, tokens) = service.login(request).await?;

    let jar = with_auth_cookies(jar, tokens, state.is_production());
    Ok((jar, Json(user)))
}

/// Issue a new access token from the refresh token cookie
///
/// POST /api/auth/refresh-token
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<serde_json::Value>)> {
    let refresh_token = jar
        .get(REFRESH_TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(AppError::MissingToken)?;

    let service = AuthService::new(state.service_context());
    let access_token = service.refresh_access_token(&refresh_token).await?;

    let jar = jar.add(access_token_cookie(
        access_token,
        state.jwt_service().access_token_expiry(),
        state.is_production(),
    ));

    Ok((
        jar,
        Json(serde_json::json!({ "message": "Token refreshed successfully" })),
    ))
}

/// Logout and clear both auth cookies
///
/// POST /api/auth/logout; always succeeds, even with no or stale cookies.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<serde_json::Value>)> {
    let refresh_token = jar.get(REFRESH_TOKEN_COOKIE).map(|c| c.value().to_string());

    let service = AuthService::new(state.service_context());
    service.logout(refresh_token.as_deref()).await?;

    let jar = jar
        .add(removal_cookie(ACCESS_TOKEN_COOKIE))
        .add(removal_cookie(REFRESH_TOKEN_COOKIE));

    Ok((
        jar,
        Json(serde_json::json!({ "message": "Logged out successfully" })),
    ))
}

/// Get the current user's profile
///
/// GET /api/auth/profile
pub async fn profile(auth: AuthUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.user))
}

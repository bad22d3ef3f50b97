//! Auth cookie helpers
//!
//! Both tokens travel in cookies: `accessToken` (15 min) and `refreshToken`
//! (7 days). Cookies are `HttpOnly` and `SameSite=Strict`; the `Secure`
//! flag is set only in production so local HTTP development keeps working.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the access token
pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";

/// Cookie name for the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

fn base_cookie(name: &'static str, value: String, max_age_seconds: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(secure)
        .max_age(Duration::seconds(max_age_seconds))
        .build()
}

/// Build the access token cookie
pub fn access_token_cookie(
    token: String,
    max_age_seconds: i64,
    secure: bool,
) -> Cookie<'static> {
    base_cookie(ACCESS_TOKEN_COOKIE, token, max_age_seconds, secure)
}

/// Build the refresh token cookie
pub fn refresh_token_cookie(
    token: String,
    max_age_seconds: i64,
    secure: bool,
) -> Cookie<'static> {
    base_cookie(REFRESH_TOKEN_COOKIE, token, max_age_seconds, secure)
}

/// Build an expired cookie that instructs the browser to drop the original
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = access_token_cookie("token-value".to_string(), 900, false);
        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_secure_flag_set_in_production() {
        let cookie = refresh_token_cookie("token-value".to_string(), 604_800, true);
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn test_removal_cookie_expires_immediately() {
        let cookie = removal_cookie(ACCESS_TOKEN_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}

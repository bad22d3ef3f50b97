//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; bodies additionally derive
//! `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User signup request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// Product Requests
// ============================================================================

/// Create product request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    #[serde(default)]
    pub description: String,

    #[validate(range(min = 0.0, message = "Price must be non-negative"))]
    pub price: f64,

    #[serde(default)]
    pub image: String,

    #[validate(length(min = 1, max = 100, message = "Category must be 1-100 characters"))]
    pub category: String,
}

// ============================================================================
// Analytics Requests
// ============================================================================

/// Date range for the daily sales series (`?start=YYYY-MM-DD&end=YYYY-MM-DD`)
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DailyRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_validation() {
        let ok = SignupRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "longenough".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = SignupRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_password = SignupRequest {
            password: "short".to_string(),
            ..ok
        };
        assert!(short_password.validate().is_err());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let request = CreateProductRequest {
            name: "Beans".to_string(),
            description: String::new(),
            price: -1.0,
            image: String::new(),
            category: "coffee".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_daily_range_query_parses_dates() {
        let query: DailyRangeQuery =
            serde_json::from_str(r#"{"start":"2024-09-01","end":"2024-09-03"}"#).unwrap();
        assert_eq!(query.start, NaiveDate::from_ymd_opt(2024, 9, 1).unwrap());
        assert_eq!(query.end, NaiveDate::from_ymd_opt(2024, 9, 3).unwrap());
    }
}

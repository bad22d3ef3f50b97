//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Analytics
//! responses use camelCase field names for wire compatibility with the
//! public API (`totalSales`, `totalRevenue`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// User Responses
// ============================================================================

/// User summary returned by the auth endpoints and the profile route
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
}

// ============================================================================
// Product Responses
// ============================================================================

/// Product as returned by the catalog endpoints. Also `Deserialize`
/// because the featured list round-trips through the Redis cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Analytics Responses
// ============================================================================

/// Global store summary
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummaryResponse {
    pub users: i64,
    pub products: i64,
    pub total_sales: i64,
    pub total_revenue: f64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_readiness_reports_failing_checks() {
        let response = ReadinessResponse::ready(true, false);
        assert_eq!(response.status, "not_ready");
        assert_eq!(response.checks.database, "healthy");
        assert_eq!(response.checks.redis, "unhealthy");
    }

    #[test]
    fn test_summary_field_names_are_camel_case() {
        let summary = AnalyticsSummaryResponse {
            users: 2,
            products: 5,
            total_sales: 10,
            total_revenue: 250.5,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["users"], 2);
        assert_eq!(json["products"], 5);
        assert_eq!(json["totalSales"], 10);
        assert_eq!(json["totalRevenue"], 250.5);
    }

    #[test]
    fn test_product_response_camel_case() {
        let product = ProductResponse {
            id: Uuid::nil(),
            name: "Beans".to_string(),
            description: String::new(),
            price: 18.5,
            image: String::new(),
            category: "coffee".to_string(),
            is_featured: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["isFeatured"], true);
        assert!(json.get("is_featured").is_none());
    }
}

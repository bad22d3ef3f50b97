//! Analytics handlers (admin only)

use axum::{
    extract::{Query, State},
    Json,
};
use shop_core::DailySales;
use shop_service::{AnalyticsService, AnalyticsSummaryResponse, DailyRangeQuery};

use crate::extractors::AdminUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Global store summary: user/product counts and order totals
///
/// GET /api/analytics
pub async fn summary(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<AnalyticsSummaryResponse>> {
    let service = AnalyticsService::new(state.service_context());
    let summary = service.global_summary().await?;
    Ok(Json(summary))
}

/// Daily sales series over an inclusive date range, zero-filled
///
/// GET /api/analytics/daily?start=YYYY-MM-DD&end=YYYY-MM-DD
pub async fn daily(
    State(state): State<AppState>,
    _admin: AdminUser,
    Query(range): Query<DailyRangeQuery>,
) -> ApiResult<Json<Vec<DailySales>>> {
    let service = AnalyticsService::new(state.service_context());
    let series = service.daily_summary(range.start, range.end).await?;
    Ok(Json(series))
}

//! Analytics service
//!
//! Global store totals plus a zero-filled daily sales series.

use chrono::{Days, NaiveDate};
use shop_core::{DailySales, DailyTotal};
use tracing::instrument;

use crate::dto::AnalyticsSummaryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Analytics service
pub struct AnalyticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new AnalyticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Global store summary: user and product counts plus order totals.
    /// An empty store reports zeros, not an error.
    #[instrument(skip(self))]
    pub async fn global_summary(&self) -> ServiceResult<AnalyticsSummaryResponse> {
        let users = self.ctx.user_repo().count().await?;
        let products = self.ctx.product_repo().count().await?;
        let totals = self.ctx.order_repo().count_and_revenue().await?;

        Ok(AnalyticsSummaryResponse {
            users,
            products,
            total_sales: totals.total_sales,
            total_revenue: totals.total_revenue,
        })
    }

    /// Daily sales series over an inclusive date range, one entry per
    /// calendar day. Days without orders appear with zero sales and revenue.
    #[instrument(skip(self))]
    pub async fn daily_summary(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> ServiceResult<Vec<DailySales>> {
        if start > end {
            return Ok(Vec::new());
        }

        let totals = self.ctx.order_repo().daily_totals(start, end).await?;

        Ok(fill_daily_series(start, end, &totals))
    }
}

/// Merge aggregated per-day totals into a dense series over `[start, end]`.
///
/// `totals` must be sorted ascending by day with at most one entry per day,
/// which is what the grouped repository query returns. Days absent from
/// `totals` come out as zero entries.
fn fill_daily_series(start: NaiveDate, end: NaiveDate, totals: &[DailyTotal]) -> Vec<DailySales> {
    let mut series = Vec::new();
    let mut totals_iter = totals.iter().peekable();

    let mut day = start;
    loop {
        match totals_iter.peek() {
            Some(total) if total.day == day => {
                series.push(DailySales::new(day, total.sales, total.revenue));
                totals_iter.next();
            }
            _ => series.push(DailySales::empty(day)),
        }

        if day >= end {
            break;
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fill_zero_fills_missing_days() {
        let totals = vec![
            DailyTotal {
                day: date(2024, 9, 1),
                sales: 3,
                revenue: 100.0,
            },
            DailyTotal {
                day: date(2024, 9, 3),
                sales: 1,
                revenue: 50.0,
            },
        ];

        let series = fill_daily_series(date(2024, 9, 1), date(2024, 9, 3), &totals);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, "2024-09-01");
        assert_eq!(series[0].sales, 3);
        assert!((series[0].revenue - 100.0).abs() < f64::EPSILON);
        assert_eq!(series[1].date, "2024-09-02");
        assert_eq!(series[1].sales, 0);
        assert!((series[1].revenue).abs() < f64::EPSILON);
        assert_eq!(series[2].date, "2024-09-03");
        assert_eq!(series[2].sales, 1);
    }

    #[test]
    fn test_fill_single_day_range() {
        let series = fill_daily_series(date(2024, 9, 1), date(2024, 9, 1), &[]);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, "2024-09-01");
        assert_eq!(series[0].sales, 0);
    }

    #[test]
    fn test_fill_all_days_empty() {
        let series = fill_daily_series(date(2024, 2, 27), date(2024, 3, 2), &[]);
        // 2024 is a leap year
        assert_eq!(series.len(), 5);
        assert_eq!(series[2].date, "2024-02-29");
        assert!(series.iter().all(|d| d.sales == 0 && d.revenue == 0.0));
    }

    #[test]
    fn test_fill_spans_month_boundary() {
        let totals = vec![DailyTotal {
            day: date(2024, 10, 1),
            sales: 2,
            revenue: 20.0,
        }];

        let series = fill_daily_series(date(2024, 9, 29), date(2024, 10, 1), &totals);

        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, "2024-09-29");
        assert_eq!(series[2].date, "2024-10-01");
        assert_eq!(series[2].sales, 2);
    }
}

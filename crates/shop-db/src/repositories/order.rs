//! PostgreSQL implementation of OrderRepository
//!
//! Orders are read-only here: the two queries below are the whole surface
//! the analytics aggregator needs.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use shop_core::{DailyTotal, OrderRepository, OrderTotals, RepoResult};

use crate::models::{DailyTotalRow, OrderTotalsRow};

use super::error::map_db_error;

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn count_and_revenue(&self) -> RepoResult<OrderTotals> {
        // COALESCE keeps an empty table at 0/0 instead of NULL
        let row = sqlx::query_as::<_, OrderTotalsRow>(
            r"
            SELECT COUNT(*) AS total_sales,
                   COALESCE(SUM(total_amount), 0)::DOUBLE PRECISION AS total_revenue
            FROM orders
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(OrderTotals::from(row))
    }

    #[instrument(skip(self))]
    async fn daily_totals(&self, start: NaiveDate, end: NaiveDate) -> RepoResult<Vec<DailyTotal>> {
        // UTC date component is the grouping key, matching the wire format
        let rows = sqlx::query_as::<_, DailyTotalRow>(
            r"
            SELECT (created_at AT TIME ZONE 'UTC')::date AS day,
                   COUNT(*) AS sales,
                   COALESCE(SUM(total_amount), 0)::DOUBLE PRECISION AS revenue
            FROM orders
            WHERE (created_at AT TIME ZONE 'UTC')::date BETWEEN $1 AND $2
            GROUP BY day
            ORDER BY day
            ",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(DailyTotal::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgOrderRepository>();
    }
}

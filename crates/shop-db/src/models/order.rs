//! Order aggregation row models
//!
//! Orders are never loaded whole by this core; only aggregate rows come
//! back from the database.

use chrono::NaiveDate;
use sqlx::FromRow;

use shop_core::{DailyTotal, OrderTotals};

/// Global order totals row. `COALESCE` in the query guarantees non-null
/// zeros on an empty table.
#[derive(Debug, Clone, FromRow)]
pub struct OrderTotalsRow {
    pub total_sales: i64,
    pub total_revenue: f64,
}

impl From<OrderTotalsRow> for OrderTotals {
    fn from(row: OrderTotalsRow) -> Self {
        Self {
            total_sales: row.total_sales,
            total_revenue: row.total_revenue,
        }
    }
}

/// One grouped day of order totals
#[derive(Debug, Clone, FromRow)]
pub struct DailyTotalRow {
    pub day: NaiveDate,
    pub sales: i64,
    pub revenue: f64,
}

impl From<DailyTotalRow> for DailyTotal {
    fn from(row: DailyTotalRow) -> Self {
        Self {
            day: row.day,
            sales: row.sales,
            revenue: row.revenue,
        }
    }
}

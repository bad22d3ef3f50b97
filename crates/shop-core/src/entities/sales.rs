//! Derived sales values produced by the analytics aggregator

use chrono::NaiveDate;
use serde::Serialize;

/// One calendar day of sales. Produced fresh on each aggregation call,
/// never persisted. `date` is the UTC day formatted as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySales {
    pub date: String,
    pub sales: i64,
    pub revenue: f64,
}

impl DailySales {
    /// Build an entry for a day with activity
    pub fn new(day: NaiveDate, sales: i64, revenue: f64) -> Self {
        Self {
            date: day.format("%Y-%m-%d").to_string(),
            sales,
            revenue,
        }
    }

    /// Build a zero-valued entry for a day absent from the aggregated data
    pub fn empty(day: NaiveDate) -> Self {
        Self::new(day, 0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_format() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
        let entry = DailySales::new(day, 3, 100.0);
        assert_eq!(entry.date, "2024-09-01");
    }

    #[test]
    fn test_empty_entry() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let entry = DailySales::empty(day);
        assert_eq!(entry.sales, 0);
        assert_eq!(entry.revenue, 0.0);
    }

    #[test]
    fn test_serializes_plain_fields() {
        let day = NaiveDate::from_ymd_opt(2024, 9, 3).unwrap();
        let json = serde_json::to_value(DailySales::new(day, 1, 50.0)).unwrap();
        assert_eq!(json["date"], "2024-09-03");
        assert_eq!(json["sales"], 1);
        assert_eq!(json["revenue"], 50.0);
    }
}

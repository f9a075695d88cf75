use serde::Serialize;
use time::Date;

/// Per-day ownership cost figures derived from a stored asset. Never
/// persisted: `days_held` moves every day, so these are recomputed on
/// every read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostMetrics {
    pub days_held: i64,
    pub daily_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_resale_daily_cost: Option<f64>,
}

/// Whole calendar days between purchase and `today`, clamped to a minimum
/// of 1 so same-day purchases don't divide by zero.
pub fn days_held(purchase_date: Date, today: Date) -> i64 {
    (today - purchase_date).whole_days().max(1)
}

pub fn cost_metrics(
    price: f64,
    purchase_date: Date,
    resale_price: Option<f64>,
    today: Date,
) -> CostMetrics {
    let days = days_held(purchase_date, today);
    CostMetrics {
        days_held: days,
        daily_cost: price / days as f64,
        // A projection at the estimated resale price, not realized proceeds.
        post_resale_daily_cost: resale_price.map(|resale| (price - resale) / days as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Duration;

    #[test]
    fn daily_cost_over_a_full_year() {
        let today = date!(2026 - 01 - 01);
        let purchased = today - Duration::days(365);
        let m = cost_metrics(3650.0, purchased, None, today);
        assert_eq!(m.days_held, 365);
        assert!((m.daily_cost - 10.0).abs() < 1e-9);
        assert!(m.post_resale_daily_cost.is_none());
    }

    #[test]
    fn same_day_purchase_clamps_to_one_day() {
        let today = date!(2026 - 08 - 06);
        let m = cost_metrics(500.0, today, None, today);
        assert_eq!(m.days_held, 1);
        assert!((m.daily_cost - 500.0).abs() < 1e-9);
    }

    #[test]
    fn future_purchase_date_also_clamps() {
        let today = date!(2026 - 08 - 06);
        assert_eq!(days_held(date!(2026 - 08 - 20), today), 1);
    }

    #[test]
    fn resale_projection() {
        let today = date!(2026 - 01 - 01);
        let purchased = today - Duration::days(100);
        let m = cost_metrics(1000.0, purchased, Some(400.0), today);
        assert_eq!(m.days_held, 100);
        assert!((m.post_resale_daily_cost.unwrap() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn recomputation_tracks_the_clock_not_storage_time() {
        let purchased = date!(2025 - 01 - 01);
        let at_storage = cost_metrics(730.0, purchased, None, date!(2025 - 01 - 03));
        let much_later = cost_metrics(730.0, purchased, None, date!(2027 - 01 - 01));
        assert_eq!(at_storage.days_held, 2);
        assert_eq!(much_later.days_held, 730);
        assert!((much_later.daily_cost - 1.0).abs() < 1e-9);
    }

    #[test]
    fn metrics_json_omits_absent_resale_projection() {
        let m = cost_metrics(100.0, date!(2026 - 01 - 01), None, date!(2026 - 01 - 11));
        let json = serde_json::to_value(m).unwrap();
        assert_eq!(json["days_held"], 10);
        assert!(json.get("post_resale_daily_cost").is_none());
    }
}

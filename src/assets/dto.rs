use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::assets::metrics::{cost_metrics, CostMetrics};
use crate::assets::repo::Asset;
use crate::error::ApiError;

time::serde::format_description!(date_fmt, Date, "[year]-[month]-[day]");

/// Mutable asset fields as supplied by the client. Ids and ownership are
/// never taken from the payload; create assigns them, update resolves them
/// from the path and the caller's token.
#[derive(Debug, Deserialize)]
pub struct AssetPayload {
    pub name: String,
    pub category: String,
    #[serde(with = "date_fmt")]
    pub purchase_date: Date,
    pub store: Option<String>,
    pub price: f64,
    pub resale_price: Option<f64>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(default, with = "date_fmt::option")]
    pub warranty_expiry: Option<Date>,
}

impl AssetPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::InvalidInput("name must not be empty".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ApiError::InvalidInput("category must not be empty".into()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(ApiError::InvalidInput(
                "price must be a non-negative number".into(),
            ));
        }
        if let Some(resale) = self.resale_price {
            if !resale.is_finite() || resale < 0.0 {
                return Err(ApiError::InvalidInput(
                    "resale_price must be a non-negative number".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct AssetResponse {
    pub id: i64,
    pub name: String,
    pub category: String,
    #[serde(with = "date_fmt")]
    pub purchase_date: Date,
    pub store: Option<String>,
    pub price: f64,
    pub resale_price: Option<f64>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    #[serde(with = "date_fmt::option")]
    pub warranty_expiry: Option<Date>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub metrics: CostMetrics,
}

impl AssetResponse {
    /// Derived metrics are computed here, at read time, against `today`.
    pub fn from_asset(asset: Asset, today: Date) -> Self {
        let metrics = cost_metrics(
            asset.price,
            asset.purchase_date,
            asset.resale_price,
            today,
        );
        Self {
            id: asset.id,
            name: asset.name,
            category: asset.category,
            purchase_date: asset.purchase_date,
            store: asset.store,
            price: asset.price,
            resale_price: asset.resale_price,
            photo_url: asset.photo_url,
            location: asset.location,
            notes: asset.notes,
            warranty_expiry: asset.warranty_expiry,
            created_at: asset.created_at,
            metrics,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChangeCount {
    pub changes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: serde_json::Value) -> AssetPayload {
        serde_json::from_value(json).expect("payload should deserialize")
    }

    #[test]
    fn accepts_a_minimal_valid_payload() {
        let p = payload(serde_json::json!({
            "name": "MacBook Pro",
            "category": "PC",
            "purchase_date": "2024-01-01",
            "price": 1999.0
        }));
        assert!(p.validate().is_ok());
        assert!(p.warranty_expiry.is_none());
    }

    #[test]
    fn rejects_blank_name_and_category() {
        let p = payload(serde_json::json!({
            "name": "  ",
            "category": "PC",
            "purchase_date": "2024-01-01",
            "price": 10.0
        }));
        assert!(p.validate().is_err());

        let p = payload(serde_json::json!({
            "name": "Camera",
            "category": "",
            "purchase_date": "2024-01-01",
            "price": 10.0
        }));
        assert!(p.validate().is_err());
    }

    #[test]
    fn rejects_negative_prices() {
        let p = payload(serde_json::json!({
            "name": "Camera",
            "category": "Camera",
            "purchase_date": "2024-01-01",
            "price": -1.0
        }));
        assert!(p.validate().is_err());

        let p = payload(serde_json::json!({
            "name": "Camera",
            "category": "Camera",
            "purchase_date": "2024-01-01",
            "price": 100.0,
            "resale_price": -5.0
        }));
        assert!(p.validate().is_err());
    }

    #[test]
    fn malformed_date_fails_deserialization() {
        let result = serde_json::from_value::<AssetPayload>(serde_json::json!({
            "name": "Camera",
            "category": "Camera",
            "purchase_date": "01/02/2024",
            "price": 100.0
        }));
        assert!(result.is_err());
    }
}

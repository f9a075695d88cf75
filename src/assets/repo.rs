use sqlx::{FromRow, SqlitePool};
use time::{Date, OffsetDateTime};

use crate::assets::dto::AssetPayload;

/// Asset record in the database. Ownership is exclusive: every mutating
/// query below carries the owner in its predicate, so a foreign id behaves
/// exactly like a missing one.
#[derive(Debug, Clone, FromRow)]
pub struct Asset {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub category: String,
    pub purchase_date: Date,
    pub store: Option<String>,
    pub price: f64,
    pub resale_price: Option<f64>,
    pub photo_url: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub warranty_expiry: Option<Date>,
    pub created_at: OffsetDateTime,
}

pub async fn list_by_user(db: &SqlitePool, user_id: i64) -> anyhow::Result<Vec<Asset>> {
    let rows = sqlx::query_as::<_, Asset>(
        r#"
        SELECT id, user_id, name, category, purchase_date, store, price,
               resale_price, photo_url, location, notes, warranty_expiry, created_at
        FROM assets
        WHERE user_id = ?
        ORDER BY purchase_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn create(
    db: &SqlitePool,
    user_id: i64,
    payload: &AssetPayload,
) -> anyhow::Result<Asset> {
    let asset = sqlx::query_as::<_, Asset>(
        r#"
        INSERT INTO assets (user_id, name, category, purchase_date, store, price,
                            resale_price, photo_url, location, notes, warranty_expiry, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, user_id, name, category, purchase_date, store, price,
                  resale_price, photo_url, location, notes, warranty_expiry, created_at
        "#,
    )
    .bind(user_id)
    .bind(&payload.name)
    .bind(&payload.category)
    .bind(payload.purchase_date)
    .bind(&payload.store)
    .bind(payload.price)
    .bind(payload.resale_price)
    .bind(&payload.photo_url)
    .bind(&payload.location)
    .bind(&payload.notes)
    .bind(payload.warranty_expiry)
    .bind(OffsetDateTime::now_utc())
    .fetch_one(db)
    .await?;
    Ok(asset)
}

/// Full replace of all mutable fields. Returns rows affected: zero means the
/// id is missing or owned by someone else, indistinguishable on purpose.
pub async fn update(
    db: &SqlitePool,
    user_id: i64,
    asset_id: i64,
    payload: &AssetPayload,
) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE assets
        SET name = ?, category = ?, purchase_date = ?, store = ?, price = ?,
            resale_price = ?, photo_url = ?, location = ?, notes = ?, warranty_expiry = ?
        WHERE id = ? AND user_id = ?
        "#,
    )
    .bind(&payload.name)
    .bind(&payload.category)
    .bind(payload.purchase_date)
    .bind(&payload.store)
    .bind(payload.price)
    .bind(payload.resale_price)
    .bind(&payload.photo_url)
    .bind(&payload.location)
    .bind(&payload.notes)
    .bind(payload.warranty_expiry)
    .bind(asset_id)
    .bind(user_id)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(db: &SqlitePool, user_id: i64, asset_id: i64) -> anyhow::Result<u64> {
    let result = sqlx::query("DELETE FROM assets WHERE id = ? AND user_id = ?")
        .bind(asset_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected())
}

use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use time::OffsetDateTime;
use tracing::{info, instrument};

use crate::{
    assets::dto::{AssetPayload, AssetResponse, ChangeCount},
    assets::repo,
    auth::services::AuthUser,
    error::ApiError,
    state::AppState,
};

pub fn read_routes() -> Router<AppState> {
    Router::new().route("/assets", get(list_assets))
}

pub fn write_routes() -> Router<AppState> {
    Router::new()
        .route("/assets", post(create_asset))
        .route("/assets/:id", put(update_asset).delete(delete_asset))
}

#[instrument(skip(state))]
pub async fn list_assets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<AssetResponse>>, ApiError> {
    let assets = repo::list_by_user(&state.db, auth.id).await?;
    let today = OffsetDateTime::now_utc().date();
    let items = assets
        .into_iter()
        .map(|a| AssetResponse::from_asset(a, today))
        .collect();
    Ok(Json(items))
}

#[instrument(skip(state, payload))]
pub async fn create_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<AssetPayload>,
) -> Result<Json<AssetResponse>, ApiError> {
    payload.validate()?;

    let asset = repo::create(&state.db, auth.id, &payload).await?;
    info!(user_id = %auth.id, asset_id = %asset.id, "asset created");

    let today = OffsetDateTime::now_utc().date();
    Ok(Json(AssetResponse::from_asset(asset, today)))
}

#[instrument(skip(state, payload))]
pub async fn update_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<AssetPayload>,
) -> Result<Json<ChangeCount>, ApiError> {
    payload.validate()?;

    let changes = repo::update(&state.db, auth.id, id, &payload).await?;
    if changes == 0 {
        // Missing and foreign-owned look the same to the caller.
        return Err(ApiError::NotFound("Asset"));
    }
    info!(user_id = %auth.id, asset_id = %id, "asset updated");
    Ok(Json(ChangeCount { changes }))
}

#[instrument(skip(state))]
pub async fn delete_asset(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ChangeCount>, ApiError> {
    let changes = repo::delete(&state.db, auth.id, id).await?;
    info!(user_id = %auth.id, asset_id = %id, changes, "asset delete");
    Ok(Json(ChangeCount { changes }))
}

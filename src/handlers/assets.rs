use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::dto::{AssetHistoryResponse, AssetResponse};
use crate::errors::ApiError;
use crate::services::assets::{
    AssignAssetInput, CreateAssetInput, UnassignAssetInput, UpdateAssetInput,
};
use crate::AppState;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};

#[utoipa::path(
    get,
    path = "/api/v1/assets",
    tag = "Assets",
    responses(
        (status = 200, description = "All assets with display names", body = [AssetResponse])
    )
)]
pub async fn list_assets(State(state): State<AppState>) -> Result<Response, ApiError> {
    let assets = state
        .services
        .assets
        .list_assets()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(assets))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset retrieved", body = AssetResponse),
        (status = 404, description = "Asset not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let asset = state
        .services
        .assets
        .get_asset(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(asset))
}

#[utoipa::path(
    post,
    path = "/api/v1/assets",
    tag = "Assets",
    request_body = CreateAssetInput,
    responses(
        (status = 201, description = "Asset created", body = AssetResponse),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse),
        (status = 404, description = "Referenced category, location, vendor or user not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Asset tag already in use", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<CreateAssetInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let asset = state
        .services
        .assets
        .create_asset(input)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(asset))
}

#[utoipa::path(
    put,
    path = "/api/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    request_body = UpdateAssetInput,
    responses(
        (status = 200, description = "Asset updated", body = AssetResponse),
        (status = 404, description = "Asset not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Asset tag already in use", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateAssetInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let asset = state
        .services
        .assets
        .update_asset(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(asset))
}

#[utoipa::path(
    delete,
    path = "/api/v1/assets/{id}",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 204, description = "Asset deleted, history rows cascade"),
        (status = 404, description = "Asset not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .services
        .assets
        .delete_asset(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

#[utoipa::path(
    post,
    path = "/api/v1/assets/{id}/assign",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    request_body = AssignAssetInput,
    responses(
        (status = 200, description = "Asset assigned"),
        (status = 400, description = "assigned_to missing", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid X-User-Id header", body = crate::errors::ErrorResponse),
        (status = 404, description = "Asset or user not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn assign_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    user: AuthenticatedUser,
    Json(input): Json<AssignAssetInput>,
) -> Result<Response, ApiError> {
    state
        .services
        .assets
        .assign_asset(id, input, user.user_id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "message": "Asset assigned successfully" })))
}

#[utoipa::path(
    post,
    path = "/api/v1/assets/{id}/unassign",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    request_body = UnassignAssetInput,
    responses(
        (status = 200, description = "Asset unassigned, no-op when already unassigned"),
        (status = 404, description = "Asset not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn unassign_asset(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UnassignAssetInput>,
) -> Result<Response, ApiError> {
    state
        .services
        .assets
        .unassign_asset(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(json!({ "message": "Asset unassigned successfully" })))
}

#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}/history",
    tag = "Assets",
    params(("id" = i64, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Assignment and maintenance history, newest first", body = AssetHistoryResponse),
        (status = 404, description = "Asset not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn asset_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let history = state
        .services
        .assets
        .asset_history(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(history))
}

pub fn asset_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assets).post(create_asset))
        .route(
            "/:id",
            get(get_asset).put(update_asset).delete(delete_asset),
        )
        .route("/:id/assign", post(assign_asset))
        .route("/:id/unassign", post(unassign_asset))
        .route("/:id/history", get(asset_history))
}

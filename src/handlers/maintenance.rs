use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

use crate::auth::AuthenticatedUser;
use crate::dto::MaintenanceResponse;
use crate::errors::ApiError;
use crate::services::maintenance::{CreateMaintenanceInput, UpdateMaintenanceInput};
use crate::AppState;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};

#[utoipa::path(
    get,
    path = "/api/v1/maintenance",
    tag = "Maintenance",
    responses(
        (status = 200, description = "All maintenance records by scheduled date", body = [MaintenanceResponse])
    )
)]
pub async fn list_maintenance(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state
        .services
        .maintenance
        .list_maintenance()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(records))
}

#[utoipa::path(
    get,
    path = "/api/v1/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = i64, Path, description = "Maintenance record id")),
    responses(
        (status = 200, description = "Maintenance record retrieved", body = MaintenanceResponse),
        (status = 404, description = "Maintenance record not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let record = state
        .services
        .maintenance
        .get_maintenance(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(record))
}

#[utoipa::path(
    post,
    path = "/api/v1/maintenance",
    tag = "Maintenance",
    request_body = CreateMaintenanceInput,
    responses(
        (status = 201, description = "Maintenance record created", body = MaintenanceResponse),
        (status = 404, description = "Referenced asset or vendor not found", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid X-User-Id header", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_maintenance(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(input): Json<CreateMaintenanceInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let record = state
        .services
        .maintenance
        .create_maintenance(input, user.user_id)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(record))
}

#[utoipa::path(
    put,
    path = "/api/v1/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = i64, Path, description = "Maintenance record id")),
    request_body = UpdateMaintenanceInput,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceResponse),
        (status = 404, description = "Maintenance record not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateMaintenanceInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let record = state
        .services
        .maintenance
        .update_maintenance(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(record))
}

#[utoipa::path(
    delete,
    path = "/api/v1/maintenance/{id}",
    tag = "Maintenance",
    params(("id" = i64, Path, description = "Maintenance record id")),
    responses(
        (status = 204, description = "Maintenance record deleted"),
        (status = 404, description = "Maintenance record not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_maintenance(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .services
        .maintenance
        .delete_maintenance(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn maintenance_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_maintenance).post(create_maintenance))
        .route(
            "/:id",
            get(get_maintenance)
                .put(update_maintenance)
                .delete(delete_maintenance),
        )
}

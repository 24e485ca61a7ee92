use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

use crate::dto::LocationResponse;
use crate::errors::ApiError;
use crate::services::locations::{CreateLocationInput, UpdateLocationInput};
use crate::AppState;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};

#[utoipa::path(
    get,
    path = "/api/v1/locations",
    tag = "Locations",
    responses(
        (status = 200, description = "Active locations with asset counts", body = [LocationResponse])
    )
)]
pub async fn list_locations(State(state): State<AppState>) -> Result<Response, ApiError> {
    let locations = state
        .services
        .locations
        .list_locations()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(locations))
}

#[utoipa::path(
    get,
    path = "/api/v1/locations/{id}",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    responses(
        (status = 200, description = "Location retrieved", body = LocationResponse),
        (status = 404, description = "Location not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let location = state
        .services
        .locations
        .get_location(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(location))
}

#[utoipa::path(
    post,
    path = "/api/v1/locations",
    tag = "Locations",
    request_body = CreateLocationInput,
    responses(
        (status = 201, description = "Location created", body = LocationResponse),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse),
        (status = 409, description = "Name already in use", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    Json(input): Json<CreateLocationInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let location = state
        .services
        .locations
        .create_location(input)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(location))
}

#[utoipa::path(
    put,
    path = "/api/v1/locations/{id}",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    request_body = UpdateLocationInput,
    responses(
        (status = 200, description = "Location updated", body = LocationResponse),
        (status = 404, description = "Location not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateLocationInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let location = state
        .services
        .locations
        .update_location(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(location))
}

#[utoipa::path(
    delete,
    path = "/api/v1/locations/{id}",
    tag = "Locations",
    params(("id" = i64, Path, description = "Location id")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Location still referenced by assets", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .services
        .locations
        .delete_location(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn location_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route(
            "/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
}

use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

use crate::dto::VendorResponse;
use crate::errors::ApiError;
use crate::services::vendors::{CreateVendorInput, UpdateVendorInput};
use crate::AppState;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};

#[utoipa::path(
    get,
    path = "/api/v1/vendors",
    tag = "Vendors",
    responses(
        (status = 200, description = "Active vendors with asset counts", body = [VendorResponse])
    )
)]
pub async fn list_vendors(State(state): State<AppState>) -> Result<Response, ApiError> {
    let vendors = state
        .services
        .vendors
        .list_vendors()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(vendors))
}

#[utoipa::path(
    get,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor retrieved", body = VendorResponse),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let vendor = state
        .services
        .vendors
        .get_vendor(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(vendor))
}

#[utoipa::path(
    post,
    path = "/api/v1/vendors",
    tag = "Vendors",
    request_body = CreateVendorInput,
    responses(
        (status = 201, description = "Vendor created", body = VendorResponse),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse),
        (status = 409, description = "Name already in use", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(input): Json<CreateVendorInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let vendor = state
        .services
        .vendors
        .create_vendor(input)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(vendor))
}

#[utoipa::path(
    put,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor id")),
    request_body = UpdateVendorInput,
    responses(
        (status = 200, description = "Vendor updated", body = VendorResponse),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateVendorInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let vendor = state
        .services
        .vendors
        .update_vendor(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(vendor))
}

#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{id}",
    tag = "Vendors",
    params(("id" = i64, Path, description = "Vendor id")),
    responses(
        (status = 204, description = "Vendor deleted, asset references cleared"),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .services
        .vendors
        .delete_vendor(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route(
            "/:id",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
}

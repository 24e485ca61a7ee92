use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Router,
};

use crate::dto::UserResponse;
use crate::errors::ApiError;
use crate::AppState;

use super::common::{map_service_error, success_response};

#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Active users", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state
        .services
        .users
        .list_users()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(users))
}

#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User retrieved", body = UserResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let user = state
        .services
        .users
        .get_user(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(user))
}

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/:id", get(get_user))
}

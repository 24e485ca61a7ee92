use axum::{
    extract::{Path, State},
    response::Response,
    routing::get,
    Json, Router,
};

use crate::auth::AuthenticatedUser;
use crate::dto::AssignmentResponse;
use crate::errors::ApiError;
use crate::services::assignments::{CreateAssignmentInput, UpdateAssignmentInput};
use crate::AppState;

use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
};

#[utoipa::path(
    get,
    path = "/api/v1/assignments",
    tag = "Assignments",
    responses(
        (status = 200, description = "All assignment records, newest first", body = [AssignmentResponse])
    )
)]
pub async fn list_assignments(State(state): State<AppState>) -> Result<Response, ApiError> {
    let assignments = state
        .services
        .assignments
        .list_assignments()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(assignments))
}

#[utoipa::path(
    get,
    path = "/api/v1/assignments/{id}",
    tag = "Assignments",
    params(("id" = i64, Path, description = "Assignment id")),
    responses(
        (status = 200, description = "Assignment retrieved", body = AssignmentResponse),
        (status = 404, description = "Assignment not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let assignment = state
        .services
        .assignments
        .get_assignment(id)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(assignment))
}

#[utoipa::path(
    post,
    path = "/api/v1/assignments",
    tag = "Assignments",
    request_body = CreateAssignmentInput,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentResponse),
        (status = 404, description = "Referenced asset or user not found", body = crate::errors::ErrorResponse),
        (status = 401, description = "Missing or invalid X-User-Id header", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_assignment(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(input): Json<CreateAssignmentInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let assignment = state
        .services
        .assignments
        .create_assignment(input, user.user_id)
        .await
        .map_err(map_service_error)?;
    Ok(created_response(assignment))
}

#[utoipa::path(
    put,
    path = "/api/v1/assignments/{id}",
    tag = "Assignments",
    params(("id" = i64, Path, description = "Assignment id")),
    request_body = UpdateAssignmentInput,
    responses(
        (status = 200, description = "Assignment updated", body = AssignmentResponse),
        (status = 404, description = "Assignment not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateAssignmentInput>,
) -> Result<Response, ApiError> {
    validate_input(&input)?;
    let assignment = state
        .services
        .assignments
        .update_assignment(id, input)
        .await
        .map_err(map_service_error)?;
    Ok(success_response(assignment))
}

#[utoipa::path(
    delete,
    path = "/api/v1/assignments/{id}",
    tag = "Assignments",
    params(("id" = i64, Path, description = "Assignment id")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Assignment not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    state
        .services
        .assignments
        .delete_assignment(id)
        .await
        .map_err(map_service_error)?;
    Ok(no_content_response())
}

pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route(
            "/:id",
            get(get_assignment)
                .put(update_assignment)
                .delete(delete_assignment),
        )
}

use axum::{extract::State, response::Response, routing::get, Router};

use crate::dto::{AlertsResponse, DashboardStats};
use crate::errors::ApiError;
use crate::AppState;

use super::common::{map_service_error, success_response};

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Fleet counts, totals and recent activity", body = DashboardStats)
    )
)]
pub async fn dashboard_stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    let stats = state
        .services
        .dashboard
        .stats()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(stats))
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard/alerts",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Maintenance alerts derived from current fleet state", body = AlertsResponse)
    )
)]
pub async fn dashboard_alerts(State(state): State<AppState>) -> Result<Response, ApiError> {
    let alerts = state
        .services
        .dashboard
        .alerts()
        .await
        .map_err(map_service_error)?;
    Ok(success_response(alerts))
}

pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(dashboard_stats))
        .route("/alerts", get(dashboard_alerts))
}

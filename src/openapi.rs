use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ITAM API",
        version = "1.0.0",
        description = r#"
# IT Asset Management API

Tracks the lifecycle of IT assets: categorization, physical location, vendor
provenance, assignment to personnel, and maintenance history.

## Features

- **Asset Registry**: Create, update, and track hardware and software assets
- **Assignment Lifecycle**: Assign assets to people with a full audit trail
- **Maintenance Tracking**: Schedule and record maintenance work per asset
- **Dashboard**: Fleet statistics and maintenance alerts

## Identity

Write operations that record an acting identity (asset assignment, assignment
and maintenance creation) require an `X-User-Id` header naming an existing
user. Requests without it are rejected with 401.

## Error Handling

Errors use a consistent JSON shape with appropriate HTTP status codes:

```json
{
  "error": "Not Found",
  "message": "Asset 42 not found",
  "timestamp": "2024-01-01T00:00:00Z"
}
```
        "#
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development")
    ),
    tags(
        (name = "Categories", description = "Asset category endpoints"),
        (name = "Locations", description = "Physical location endpoints"),
        (name = "Vendors", description = "Vendor endpoints"),
        (name = "Users", description = "User directory endpoints"),
        (name = "Assets", description = "Asset registry and lifecycle endpoints"),
        (name = "Assignments", description = "Assignment record endpoints"),
        (name = "Maintenance", description = "Maintenance record endpoints"),
        (name = "Dashboard", description = "Statistics and alert endpoints")
    ),
    paths(
        // Categories
        crate::handlers::categories::list_categories,
        crate::handlers::categories::get_category,
        crate::handlers::categories::create_category,
        crate::handlers::categories::update_category,
        crate::handlers::categories::delete_category,

        // Locations
        crate::handlers::locations::list_locations,
        crate::handlers::locations::get_location,
        crate::handlers::locations::create_location,
        crate::handlers::locations::update_location,
        crate::handlers::locations::delete_location,

        // Vendors
        crate::handlers::vendors::list_vendors,
        crate::handlers::vendors::get_vendor,
        crate::handlers::vendors::create_vendor,
        crate::handlers::vendors::update_vendor,
        crate::handlers::vendors::delete_vendor,

        // Users
        crate::handlers::users::list_users,
        crate::handlers::users::get_user,

        // Assets
        crate::handlers::assets::list_assets,
        crate::handlers::assets::get_asset,
        crate::handlers::assets::create_asset,
        crate::handlers::assets::update_asset,
        crate::handlers::assets::delete_asset,
        crate::handlers::assets::assign_asset,
        crate::handlers::assets::unassign_asset,
        crate::handlers::assets::asset_history,

        // Assignments
        crate::handlers::assignments::list_assignments,
        crate::handlers::assignments::get_assignment,
        crate::handlers::assignments::create_assignment,
        crate::handlers::assignments::update_assignment,
        crate::handlers::assignments::delete_assignment,

        // Maintenance
        crate::handlers::maintenance::list_maintenance,
        crate::handlers::maintenance::get_maintenance,
        crate::handlers::maintenance::create_maintenance,
        crate::handlers::maintenance::update_maintenance,
        crate::handlers::maintenance::delete_maintenance,

        // Dashboard
        crate::handlers::dashboard::dashboard_stats,
        crate::handlers::dashboard::dashboard_alerts,

        // Health intentionally omitted from OpenAPI paths
    ),
    components(
        schemas(
            // Enums
            crate::models::AssetStatus,
            crate::models::AssetCondition,
            crate::models::MaintenanceType,
            crate::models::MaintenanceStatus,

            // Response types
            crate::dto::UserResponse,
            crate::dto::CategoryResponse,
            crate::dto::LocationResponse,
            crate::dto::VendorResponse,
            crate::dto::AssetResponse,
            crate::dto::AssignmentResponse,
            crate::dto::MaintenanceResponse,
            crate::dto::AssetHistoryResponse,
            crate::dto::DashboardStats,
            crate::dto::AlertSeverity,
            crate::dto::Alert,
            crate::dto::AlertsResponse,

            // Request types
            crate::services::categories::CreateCategoryInput,
            crate::services::categories::UpdateCategoryInput,
            crate::services::locations::CreateLocationInput,
            crate::services::locations::UpdateLocationInput,
            crate::services::vendors::CreateVendorInput,
            crate::services::vendors::UpdateVendorInput,
            crate::services::assets::CreateAssetInput,
            crate::services::assets::UpdateAssetInput,
            crate::services::assets::AssignAssetInput,
            crate::services::assets::UnassignAssetInput,
            crate::services::assignments::CreateAssignmentInput,
            crate::services::assignments::UpdateAssignmentInput,
            crate::services::maintenance::CreateMaintenanceInput,
            crate::services::maintenance::UpdateMaintenanceInput,

            // Error types
            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_document_includes_core_paths() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string_pretty(&openapi).unwrap();
        assert!(json.contains("ITAM API"));
        assert!(json.contains("/api/v1/assets"));
        assert!(json.contains("/api/v1/assets/{id}/assign"));
        assert!(json.contains("/api/v1/dashboard/stats"));
    }

    #[test]
    fn openapi_document_renders_nested_category_schema() {
        let openapi = ApiDocV1::openapi();
        let json = serde_json::to_string(&openapi).unwrap();
        assert!(json.contains("CategoryResponse"));
        assert!(json.contains("\"children\""));
    }
}

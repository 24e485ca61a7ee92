mod common;

use axum::http::{Method, StatusCode};
use sea_orm::EntityTrait;
use serde_json::json;

use common::TestApp;
use itam_api::entities::user;

#[tokio::test]
async fn category_with_assets_cannot_be_deleted() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let asset_id = app.seed_asset("LT-0001", category_id, location_id).await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/categories/{}", category_id),
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Both rows survive the rejected delete.
    app.request_json(
        Method::GET,
        &format!("/api/v1/categories/{}", category_id),
        None,
        None,
        StatusCode::OK,
    )
    .await;
    app.request_json(
        Method::GET,
        &format!("/api/v1/assets/{}", asset_id),
        None,
        None,
        StatusCode::OK,
    )
    .await;
}

#[tokio::test]
async fn location_with_assets_cannot_be_deleted() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    app.seed_asset("LT-0001", category_id, location_id).await;

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/locations/{}", location_id),
            None,
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn vendor_delete_clears_asset_references() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let vendor = app
        .request_json(
            Method::POST,
            "/api/v1/vendors",
            Some(json!({ "name": "Initech Supply" })),
            None,
            StatusCode::CREATED,
        )
        .await;
    let vendor_id = vendor["id"].as_i64().unwrap();

    let asset = app
        .request_json(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0001",
                "name": "Vendor-sourced laptop",
                "category_id": category_id,
                "location_id": location_id,
                "vendor_id": vendor_id,
            })),
            None,
            StatusCode::CREATED,
        )
        .await;
    assert_eq!(asset["vendor_id"], vendor_id);
    assert_eq!(asset["vendor_name"], "Initech Supply");

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/vendors/{}", vendor_id),
        None,
        None,
        StatusCode::NO_CONTENT,
    )
    .await;

    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset["id"]),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert!(asset["vendor_id"].is_null());
}

#[tokio::test]
async fn user_removal_clears_asset_assignee() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let asset_id = app.seed_asset("LT-0001", category_id, location_id).await;

    app.request_json(
        Method::POST,
        &format!("/api/v1/assets/{}/assign", asset_id),
        Some(json!({ "assigned_to": alice.id })),
        Some(admin.id),
        StatusCode::OK,
    )
    .await;

    // Users are managed outside this API; simulate the identity provider
    // removing the account. The schema nulls the asset reference while the
    // assignment history rows cascade away with their subject.
    user::Entity::delete_by_id(alice.id)
        .exec(&*app.state.db)
        .await
        .expect("delete user row");

    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert!(asset["assigned_to_id"].is_null());

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    assert_eq!(assignments.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn asset_delete_cascades_history() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let asset_id = app.seed_asset("LT-0001", category_id, location_id).await;

    app.request_json(
        Method::POST,
        &format!("/api/v1/assets/{}/assign", asset_id),
        Some(json!({ "assigned_to": alice.id })),
        Some(admin.id),
        StatusCode::OK,
    )
    .await;
    app.request_json(
        Method::POST,
        "/api/v1/maintenance",
        Some(json!({
            "asset_id": asset_id,
            "maintenance_type": "inspection",
            "title": "Intake inspection",
            "description": "Checklist on arrival",
            "scheduled_date": "2026-10-01T09:00:00Z",
        })),
        Some(admin.id),
        StatusCode::CREATED,
    )
    .await;

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/assets/{}", asset_id),
        None,
        None,
        StatusCode::NO_CONTENT,
    )
    .await;

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    assert_eq!(assignments.as_array().unwrap().len(), 0);

    let maintenance = app
        .request_json(Method::GET, "/api/v1/maintenance", None, None, StatusCode::OK)
        .await;
    assert_eq!(maintenance.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn asset_creation_fails_on_unknown_references() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0001",
                "name": "Orphan asset",
                "category_id": 9_999,
                "location_id": location_id,
            })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0001",
                "name": "Orphan asset",
                "category_id": category_id,
                "location_id": 9_999,
            })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

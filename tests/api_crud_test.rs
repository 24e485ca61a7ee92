mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn health_endpoints_respond() {
    let app = TestApp::new().await;

    let response = app.request(Method::GET, "/health", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = app
        .request_json(Method::GET, "/health/ready", None, None, StatusCode::OK)
        .await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["details"]["database"]["status"], "up");
}

#[tokio::test]
async fn category_tree_and_active_filter() {
    let app = TestApp::new().await;

    let parent = app
        .request_json(
            Method::POST,
            "/api/v1/categories",
            Some(json!({ "name": "Hardware", "icon": "cpu" })),
            None,
            StatusCode::CREATED,
        )
        .await;
    let parent_id = parent["id"].as_i64().unwrap();

    let child = app
        .request_json(
            Method::POST,
            "/api/v1/categories",
            Some(json!({ "name": "Laptops", "parent_id": parent_id })),
            None,
            StatusCode::CREATED,
        )
        .await;
    assert_eq!(child["parent_id"], parent_id);

    app.request_json(
        Method::POST,
        "/api/v1/categories",
        Some(json!({ "name": "Typewriters", "is_active": false })),
        None,
        StatusCode::CREATED,
    )
    .await;

    let list = app
        .request_json(Method::GET, "/api/v1/categories", None, None, StatusCode::OK)
        .await;
    let rows = list.as_array().unwrap();
    // Inactive categories are hidden from the listing.
    assert!(rows.iter().all(|c| c["name"] != "Typewriters"));

    let hardware = rows
        .iter()
        .find(|c| c["name"] == "Hardware")
        .expect("parent category listed");
    let children = hardware["children"].as_array().unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "Laptops");

    // Duplicate names conflict.
    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(json!({ "name": "Hardware" })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // A category cannot become its own parent.
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/categories/{}", parent_id),
            Some(json!({ "parent_id": parent_id })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn category_reparenting_rejects_cycles() {
    let app = TestApp::new().await;
    let hardware_id = app.seed_category("Hardware").await;
    let laptops_id = app.seed_category("Laptops").await;

    app.request_json(
        Method::PUT,
        &format!("/api/v1/categories/{}", laptops_id),
        Some(json!({ "parent_id": hardware_id })),
        None,
        StatusCode::OK,
    )
    .await;

    // Closing the loop through an ancestor is refused.
    let response = app
        .request(
            Method::PUT,
            &format!("/api/v1/categories/{}", hardware_id),
            Some(json!({ "parent_id": laptops_id })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The tree still reads back with the original nesting intact.
    let categories = app
        .request_json(Method::GET, "/api/v1/categories", None, None, StatusCode::OK)
        .await;
    let roots = categories.as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "Hardware");
    assert_eq!(roots[0]["children"][0]["name"], "Laptops");
}

#[tokio::test]
async fn location_crud_and_asset_count() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;

    let location = app
        .request_json(
            Method::POST,
            "/api/v1/locations",
            Some(json!({
                "name": "HQ",
                "city": "Berlin",
                "contact_email": "facilities@example.com",
            })),
            None,
            StatusCode::CREATED,
        )
        .await;
    let location_id = location["id"].as_i64().unwrap();
    assert_eq!(location["asset_count"], 0);

    app.seed_asset("LT-0001", category_id, location_id).await;
    app.seed_asset("LT-0002", category_id, location_id).await;

    let location = app
        .request_json(
            Method::GET,
            &format!("/api/v1/locations/{}", location_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(location["asset_count"], 2);

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/locations/{}", location_id),
            Some(json!({ "city": "Munich" })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["city"], "Munich");
    assert_eq!(updated["name"], "HQ");

    // Malformed contact email is rejected up front.
    let response = app
        .request(
            Method::POST,
            "/api/v1/locations",
            Some(json!({ "name": "Annex", "contact_email": "not-an-email" })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn vendor_crud_roundtrip() {
    let app = TestApp::new().await;

    let vendor = app
        .request_json(
            Method::POST,
            "/api/v1/vendors",
            Some(json!({
                "name": "Initech Supply",
                "email": "sales@initech.example.com",
                "website": "https://initech.example.com",
            })),
            None,
            StatusCode::CREATED,
        )
        .await;
    let vendor_id = vendor["id"].as_i64().unwrap();

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/vendors/{}", vendor_id),
            Some(json!({ "contact_person": "Bill Lumbergh" })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["contact_person"], "Bill Lumbergh");

    let list = app
        .request_json(Method::GET, "/api/v1/vendors", None, None, StatusCode::OK)
        .await;
    assert_eq!(list.as_array().unwrap().len(), 1);

    let response = app
        .request(Method::GET, "/api/v1/vendors/9999", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_directory_is_read_only() {
    let app = TestApp::new().await;
    app.seed_user("alice", "Alice", "Ames").await;
    let bare = app.seed_user("svc-scanner", "", "").await;

    let list = app
        .request_json(Method::GET, "/api/v1/users", None, None, StatusCode::OK)
        .await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["username"], "alice");
    assert_eq!(rows[0]["full_name"], "Alice Ames");

    let user = app
        .request_json(
            Method::GET,
            &format!("/api/v1/users/{}", bare.id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    // Falls back to the username when no name parts are set.
    assert_eq!(user["full_name"], "svc-scanner");

    // No create route exists for users.
    let response = app
        .request(
            Method::POST,
            "/api/v1/users",
            Some(json!({ "username": "mallory" })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn asset_crud_roundtrip() {
    let app = TestApp::new().await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;

    let asset = app
        .request_json(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0001",
                "name": "Engineering laptop",
                "category_id": category_id,
                "location_id": location_id,
                "serial_number": "SN-1234",
                "purchase_cost": "1299.99",
            })),
            None,
            StatusCode::CREATED,
        )
        .await;
    let asset_id = asset["id"].as_i64().unwrap();
    assert_eq!(asset["status"], "available");
    assert_eq!(asset["condition"], "good");
    assert_eq!(asset["is_assigned"], false);
    assert_eq!(asset["category_name"], "Laptops");
    assert_eq!(asset["location_name"], "HQ");

    // Duplicate tags conflict.
    let response = app
        .request(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0001",
                "name": "Copycat",
                "category_id": category_id,
                "location_id": location_id,
            })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/assets/{}", asset_id),
            Some(json!({ "status": "maintenance", "condition": "fair" })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["status"], "maintenance");
    assert_eq!(updated["condition"], "fair");
    assert_eq!(updated["asset_tag"], "LT-0001");

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/assets/{}", asset_id),
        None,
        None,
        StatusCode::NO_CONTENT,
    )
    .await;

    let response = app
        .request(Method::GET, &format!("/api/v1/assets/{}", asset_id), None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn assignment_record_crud() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let asset_id = app.seed_asset("LT-0001", category_id, location_id).await;

    // assigned_by defaults to the acting identity.
    let assignment = app
        .request_json(
            Method::POST,
            "/api/v1/assignments",
            Some(json!({ "asset_id": asset_id, "assigned_to_id": alice.id })),
            Some(admin.id),
            StatusCode::CREATED,
        )
        .await;
    assert_eq!(assignment["assigned_by_id"], admin.id);
    assert_eq!(assignment["assigned_to_name"], "Alice Ames");
    assert_eq!(assignment["asset_tag"], "LT-0001");

    // Record creation requires an identity.
    let response = app
        .request(
            Method::POST,
            "/api/v1/assignments",
            Some(json!({ "asset_id": asset_id, "assigned_to_id": alice.id })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/assignments/{}", assignment["id"]),
            Some(json!({ "is_active": false, "notes": "corrected record" })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["is_active"], false);
    assert_eq!(updated["notes"], "corrected record");

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/assignments/{}", assignment["id"]),
        None,
        None,
        StatusCode::NO_CONTENT,
    )
    .await;
}

#[tokio::test]
async fn maintenance_record_crud_and_ordering() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let asset_id = app.seed_asset("LT-0001", category_id, location_id).await;

    let later = app
        .request_json(
            Method::POST,
            "/api/v1/maintenance",
            Some(json!({
                "asset_id": asset_id,
                "maintenance_type": "preventive",
                "title": "Q4 checkup",
                "description": "Routine maintenance",
                "scheduled_date": "2026-12-01T09:00:00Z",
            })),
            Some(admin.id),
            StatusCode::CREATED,
        )
        .await;
    let earlier = app
        .request_json(
            Method::POST,
            "/api/v1/maintenance",
            Some(json!({
                "asset_id": asset_id,
                "maintenance_type": "corrective",
                "title": "Keyboard swap",
                "description": "Sticky keys",
                "scheduled_date": "2026-09-20T09:00:00Z",
            })),
            Some(admin.id),
            StatusCode::CREATED,
        )
        .await;
    assert_eq!(later["created_by_name"], "Ada Admin");
    assert_eq!(later["status"], "scheduled");

    let list = app
        .request_json(Method::GET, "/api/v1/maintenance", None, None, StatusCode::OK)
        .await;
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    // Soonest scheduled work first.
    assert_eq!(rows[0]["id"], earlier["id"]);
    assert_eq!(rows[1]["id"], later["id"]);

    let updated = app
        .request_json(
            Method::PUT,
            &format!("/api/v1/maintenance/{}", earlier["id"]),
            Some(json!({
                "status": "completed",
                "completed_date": "2026-09-21T16:00:00Z",
                "cost": "45.00",
            })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(updated["status"], "completed");

    app.request_json(
        Method::DELETE,
        &format!("/api/v1/maintenance/{}", earlier["id"]),
        None,
        None,
        StatusCode::NO_CONTENT,
    )
    .await;

    let list = app
        .request_json(Method::GET, "/api/v1/maintenance", None, None, StatusCode::OK)
        .await;
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn error_body_shape_is_consistent() {
    let app = TestApp::new().await;

    let body = app
        .request_json(
            Method::GET,
            "/api/v1/assets/9999",
            None,
            None,
            StatusCode::NOT_FOUND,
        )
        .await;
    assert_eq!(body["error"], "Not Found");
    assert!(body["message"].as_str().unwrap().contains("9999"));
    assert!(body["timestamp"].is_string());
}

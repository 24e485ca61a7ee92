mod common;

use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

use common::TestApp;

async fn setup_asset(app: &TestApp) -> i64 {
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    app.seed_asset("LT-0001", category_id, location_id).await
}

#[tokio::test]
async fn assign_asset_happy_path() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let asset_id = setup_asset(&app).await;

    let body = app
        .request_json(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": alice.id, "notes": "laptop for onboarding" })),
            Some(admin.id),
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["message"], "Asset assigned successfully");

    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(asset["status"], "assigned");
    assert_eq!(asset["assigned_to_id"], alice.id);
    assert_eq!(asset["is_assigned"], true);
    assert_eq!(asset["assigned_to_name"], "Alice Ames");

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    let rows = assignments.as_array().expect("assignment list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["assigned_to_id"], alice.id);
    assert_eq!(rows[0]["assigned_by_id"], admin.id);
    assert_eq!(rows[0]["is_active"], true);
    assert_eq!(rows[0]["notes"], "laptop for onboarding");
    assert!(rows[0]["return_date"].is_null());
}

#[tokio::test]
async fn assign_requires_assigned_to() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let asset_id = setup_asset(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "notes": "no assignee" })),
            Some(admin.id),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assign_unknown_user_is_not_found() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let asset_id = setup_asset(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": 9_999 })),
            Some(admin.id),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The failed transaction must not leave the asset partially assigned.
    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(asset["status"], "available");
    assert!(asset["assigned_to_id"].is_null());
}

#[tokio::test]
async fn assign_without_identity_is_unauthorized() {
    let app = TestApp::new().await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let asset_id = setup_asset(&app).await;

    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": alice.id })),
            None,
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Same for an identity header naming a nonexistent user.
    let response = app
        .request(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": alice.id })),
            Some(4_242),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn reassign_closes_previous_assignment() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let bob = app.seed_user("bob", "Bob", "Barker").await;
    let asset_id = setup_asset(&app).await;

    for user in [&alice, &bob] {
        app.request_json(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": user.id })),
            Some(admin.id),
            StatusCode::OK,
        )
        .await;
    }

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    let rows = assignments.as_array().expect("assignment list");
    assert_eq!(rows.len(), 2);

    let active: Vec<&Value> = rows.iter().filter(|r| r["is_active"] == true).collect();
    assert_eq!(active.len(), 1, "exactly one assignment row stays active");
    assert_eq!(active[0]["assigned_to_id"], bob.id);

    let closed: Vec<&Value> = rows.iter().filter(|r| r["is_active"] == false).collect();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0]["assigned_to_id"], alice.id);
    assert!(!closed[0]["return_date"].is_null());

    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(asset["assigned_to_id"], bob.id);
}

#[tokio::test]
async fn unassign_closes_assignment_and_appends_notes() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let asset_id = setup_asset(&app).await;

    app.request_json(
        Method::POST,
        &format!("/api/v1/assets/{}/assign", asset_id),
        Some(json!({ "assigned_to": alice.id, "notes": "initial handout" })),
        Some(admin.id),
        StatusCode::OK,
    )
    .await;

    let body = app
        .request_json(
            Method::POST,
            &format!("/api/v1/assets/{}/unassign", asset_id),
            Some(json!({ "notes": "returned at offboarding" })),
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(body["message"], "Asset unassigned successfully");

    let asset = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;
    assert_eq!(asset["status"], "available");
    assert!(asset["assigned_to_id"].is_null());
    assert_eq!(asset["is_assigned"], false);

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    let rows = assignments.as_array().expect("assignment list");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["is_active"], false);
    assert!(!rows[0]["return_date"].is_null());
    assert_eq!(
        rows[0]["notes"],
        "initial handout\nReturned: returned at offboarding"
    );
}

#[tokio::test]
async fn unassign_unassigned_asset_is_a_noop() {
    let app = TestApp::new().await;
    let asset_id = setup_asset(&app).await;

    app.request_json(
        Method::POST,
        &format!("/api/v1/assets/{}/unassign", asset_id),
        Some(json!({})),
        None,
        StatusCode::OK,
    )
    .await;

    let assignments = app
        .request_json(Method::GET, "/api/v1/assignments", None, None, StatusCode::OK)
        .await;
    assert_eq!(assignments.as_array().expect("assignment list").len(), 0);
}

#[tokio::test]
async fn history_lists_assignments_and_maintenance_newest_first() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let bob = app.seed_user("bob", "Bob", "Barker").await;
    let asset_id = setup_asset(&app).await;

    for user in [&alice, &bob] {
        app.request_json(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", asset_id),
            Some(json!({ "assigned_to": user.id })),
            Some(admin.id),
            StatusCode::OK,
        )
        .await;
    }

    app.request_json(
        Method::POST,
        "/api/v1/maintenance",
        Some(json!({
            "asset_id": asset_id,
            "maintenance_type": "preventive",
            "title": "Annual checkup",
            "description": "Fans and thermal paste",
            "scheduled_date": "2026-09-15T09:00:00Z",
        })),
        Some(admin.id),
        StatusCode::CREATED,
    )
    .await;

    let history = app
        .request_json(
            Method::GET,
            &format!("/api/v1/assets/{}/history", asset_id),
            None,
            None,
            StatusCode::OK,
        )
        .await;

    let assignments = history["assignments"].as_array().expect("assignments");
    assert_eq!(assignments.len(), 2);
    // Newest assignment first.
    assert_eq!(assignments[0]["assigned_to_id"], bob.id);
    assert_eq!(assignments[1]["assigned_to_id"], alice.id);

    let maintenance = history["maintenance"].as_array().expect("maintenance");
    assert_eq!(maintenance.len(), 1);
    assert_eq!(maintenance[0]["title"], "Annual checkup");

    let response = app
        .request(Method::GET, "/api/v1/assets/9999/history", None, None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

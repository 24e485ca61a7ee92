mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn stats_on_empty_database() {
    let app = TestApp::new().await;

    let stats = app
        .request_json(Method::GET, "/api/v1/dashboard/stats", None, None, StatusCode::OK)
        .await;

    assert_eq!(stats["total_assets"], 0);
    assert_eq!(stats["available_assets"], 0);
    assert_eq!(stats["assigned_assets"], 0);
    assert_eq!(stats["maintenance_assets"], 0);
    assert_eq!(stats["total_value"], "0");
    assert_eq!(stats["categories_count"], 0);
    assert_eq!(stats["locations_count"], 0);
    assert_eq!(stats["vendors_count"], 0);
    assert_eq!(stats["recent_assignments"].as_array().unwrap().len(), 0);
    assert_eq!(stats["upcoming_maintenance"].as_array().unwrap().len(), 0);

    let alerts = app
        .request_json(Method::GET, "/api/v1/dashboard/alerts", None, None, StatusCode::OK)
        .await;
    assert_eq!(alerts["alerts"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn stats_reflect_fleet_state() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;

    app.request_json(
        Method::POST,
        "/api/v1/assets",
        Some(json!({
            "asset_tag": "LT-0001",
            "name": "Engineering laptop",
            "category_id": category_id,
            "location_id": location_id,
            "purchase_cost": "1200.50",
        })),
        None,
        StatusCode::CREATED,
    )
    .await;
    let second = app
        .request_json(
            Method::POST,
            "/api/v1/assets",
            Some(json!({
                "asset_tag": "LT-0002",
                "name": "Spare laptop",
                "category_id": category_id,
                "location_id": location_id,
                "purchase_cost": "799.50",
            })),
            None,
            StatusCode::CREATED,
        )
        .await;

    app.request_json(
        Method::POST,
        &format!("/api/v1/assets/{}/assign", second["id"]),
        Some(json!({ "assigned_to": alice.id })),
        Some(admin.id),
        StatusCode::OK,
    )
    .await;

    let stats = app
        .request_json(Method::GET, "/api/v1/dashboard/stats", None, None, StatusCode::OK)
        .await;

    assert_eq!(stats["total_assets"], 2);
    assert_eq!(stats["available_assets"], 1);
    assert_eq!(stats["assigned_assets"], 1);
    let total_value: f64 = stats["total_value"]
        .as_str()
        .expect("total_value is a decimal string")
        .parse()
        .expect("total_value parses as a number");
    assert!((total_value - 2000.0).abs() < f64::EPSILON);
    assert_eq!(stats["categories_count"], 1);
    assert_eq!(stats["locations_count"], 1);

    let recent = stats["recent_assignments"].as_array().unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0]["assigned_to_name"], "Alice Ames");
}

#[tokio::test]
async fn alerts_flag_unmaintained_and_overdue_assets() {
    let app = TestApp::new().await;
    let admin = app.seed_user("admin", "Ada", "Admin").await;
    let alice = app.seed_user("alice", "Alice", "Ames").await;
    let category_id = app.seed_category("Laptops").await;
    let location_id = app.seed_location("HQ").await;
    let assigned = app.seed_asset("LT-0001", category_id, location_id).await;
    let maintained = app.seed_asset("LT-0002", category_id, location_id).await;

    for id in [assigned, maintained] {
        app.request_json(
            Method::POST,
            &format!("/api/v1/assets/{}/assign", id),
            Some(json!({ "assigned_to": alice.id })),
            Some(admin.id),
            StatusCode::OK,
        )
        .await;
    }

    // One overdue scheduled record; it also exempts this asset from the
    // "needs maintenance" warning.
    app.request_json(
        Method::POST,
        "/api/v1/maintenance",
        Some(json!({
            "asset_id": maintained,
            "maintenance_type": "corrective",
            "title": "Screen replacement",
            "description": "Cracked panel",
            "scheduled_date": "2026-01-10T09:00:00Z",
        })),
        Some(admin.id),
        StatusCode::CREATED,
    )
    .await;

    let alerts = app
        .request_json(Method::GET, "/api/v1/dashboard/alerts", None, None, StatusCode::OK)
        .await;
    let list = alerts["alerts"].as_array().unwrap();
    assert_eq!(list.len(), 2);

    let warning = list
        .iter()
        .find(|a| a["type"] == "warning")
        .expect("maintenance required warning");
    assert_eq!(warning["title"], "Maintenance Required");
    assert_eq!(warning["count"], 1);
    assert_eq!(warning["message"], "1 assets may need maintenance scheduling");

    let error = list
        .iter()
        .find(|a| a["type"] == "error")
        .expect("overdue maintenance error");
    assert_eq!(error["title"], "Overdue Maintenance");
    assert_eq!(error["count"], 1);
}

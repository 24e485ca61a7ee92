use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use serde_json::Value;
use tower::ServiceExt;

use itam_api::{config::AppConfig, db, entities::user, handlers, AppState};

/// Helper harness for spinning up an application state backed by a
/// file-based SQLite database that lives for the duration of one test.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    _db_dir: tempfile::TempDir,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_dir = tempfile::tempdir().expect("create temp dir for test database");
        let db_path = db_dir.path().join("itam_test.db");

        let mut cfg = AppConfig::new(
            format!("sqlite://{}?mode=rwc", db_path.display()),
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.auto_migrate = true;
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");

        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);

        let router = Router::new()
            .nest("/health", handlers::health::health_routes())
            .nest("/api/v1", itam_api::api_v1_routes())
            .with_state(state.clone());

        Self {
            router,
            state,
            _db_dir: db_dir,
        }
    }

    /// Insert a user row directly; the API itself never creates users.
    pub async fn seed_user(&self, username: &str, first: &str, last: &str) -> user::Model {
        let model = user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(format!("{}@example.com", username)),
            first_name: Set(first.to_string()),
            last_name: Set(last.to_string()),
            is_active: Set(true),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        model
            .insert(&*self.state.db)
            .await
            .expect("seed user for tests")
    }

    /// Send a request against the router with an optional acting user id.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        user_id: Option<i64>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(id) = user_id {
            builder = builder.header("x-user-id", id.to_string());
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Convenience wrapper that asserts the expected status and decodes the
    /// JSON response body.
    pub async fn request_json(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        user_id: Option<i64>,
        expected: StatusCode,
    ) -> Value {
        let response = self.request(method, uri, body, user_id).await;
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        assert_eq!(
            status,
            expected,
            "unexpected status for {} (body: {})",
            uri,
            String::from_utf8_lossy(&bytes)
        );
        if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("response body is not valid json")
        }
    }

    /// Create a category over the API and return its id.
    pub async fn seed_category(&self, name: &str) -> i64 {
        let body = self
            .request_json(
                Method::POST,
                "/api/v1/categories",
                Some(serde_json::json!({ "name": name })),
                None,
                StatusCode::CREATED,
            )
            .await;
        body["id"].as_i64().expect("category id")
    }

    /// Create a location over the API and return its id.
    pub async fn seed_location(&self, name: &str) -> i64 {
        let body = self
            .request_json(
                Method::POST,
                "/api/v1/locations",
                Some(serde_json::json!({ "name": name })),
                None,
                StatusCode::CREATED,
            )
            .await;
        body["id"].as_i64().expect("location id")
    }

    /// Create an asset over the API and return its id.
    pub async fn seed_asset(&self, tag: &str, category_id: i64, location_id: i64) -> i64 {
        let body = self
            .request_json(
                Method::POST,
                "/api/v1/assets",
                Some(serde_json::json!({
                    "asset_tag": tag,
                    "name": format!("Test asset {}", tag),
                    "category_id": category_id,
                    "location_id": location_id,
                })),
                None,
                StatusCode::CREATED,
            )
            .await;
        body["id"].as_i64().expect("asset id")
    }
}

//! Test fixtures and app setup utilities

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use kintree_server::api::{create_router, AppState};
use kintree_server::auth::TokenSigner;
use kintree_server::config::AdminConfig;
use kintree_server::forest::FamilyService;
use kintree_server::storage::{FsPhotoStore, SqliteStore};

pub const TEST_TOKEN_SECRET: &str = "test-secret";

/// App under test; holds the uploads TempDir so photo files stay alive
pub struct TestApp {
    router: Router,
    _uploads: tempfile::TempDir,
}

/// Create a test app with in-memory storage
pub fn test_app() -> TestApp {
    let uploads = tempfile::tempdir().expect("failed to create uploads tempdir");
    let store = SqliteStore::in_memory().expect("failed to create in-memory storage");
    let photos =
        FsPhotoStore::new(uploads.path().join("uploads")).expect("failed to create photo store");

    let state = Arc::new(AppState {
        service: FamilyService::new(Arc::new(store)),
        photos: Arc::new(photos),
        tokens: TokenSigner::from_secret(TEST_TOKEN_SECRET),
        admin: AdminConfig::default(),
    });

    TestApp {
        router: create_router(state),
        _uploads: uploads,
    }
}

/// Mint a bearer token the test app accepts
pub fn admin_token() -> String {
    TokenSigner::from_secret(TEST_TOKEN_SECRET)
        .issue("admin", chrono::Duration::hours(1))
        .expect("failed to issue admin token")
}

impl TestApp {
    /// Run one request, returning status and parsed JSON body
    pub async fn request(&self, req: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(req).await.expect("request failed");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body was not JSON")
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> (StatusCode, Value) {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn put_json(
        &self,
        uri: &str,
        body: &Value,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::put(uri).header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::delete(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post_bytes(
        &self,
        uri: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> (StatusCode, Value) {
        self.request(
            Request::post(uri)
                .header(header::CONTENT_TYPE, content_type)
                .body(Body::from(bytes))
                .unwrap(),
        )
        .await
    }

    /// Create a member through the API and return its id
    pub async fn create_member(&self, name: &str, parent_id: Option<i64>) -> i64 {
        let body = match parent_id {
            Some(p) => serde_json::json!({"full_name": name, "parent_id": p}),
            None => serde_json::json!({"full_name": name}),
        };
        let (status, json) = self.post_json("/members", &body).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
        json["id"].as_i64().expect("created member has no id")
    }
}

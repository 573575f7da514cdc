/// Common test utilities and fixtures
use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use catalog_server::{api, state::AppState};
use catalog_storage::SqliteItemRepository;
use std::sync::Arc;

/// Create a test repository over an in-memory database with migrations applied
pub async fn create_test_repository() -> Result<Arc<SqliteItemRepository>> {
    let pool = catalog_storage::connect("sqlite::memory:", 1).await?;
    Ok(Arc::new(SqliteItemRepository::new(pool)))
}

/// Create the full router over a fresh database
pub async fn create_test_app() -> (Router, Arc<SqliteItemRepository>) {
    let repo = create_test_repository().await.unwrap();
    let app = api::create_router(AppState::new(repo.clone()));
    (app, repo)
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Build a JSON request from raw body text
pub fn raw_json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a request without a body
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

/// Sample request bodies
pub mod fixtures {
    use serde_json::{json, Value};

    pub fn nike() -> Value {
        json!({ "name": "Nike", "description": "Pure White", "price": 98 })
    }

    pub fn verrari() -> Value {
        json!({ "name": "Verrari", "description": "Badest colour", "price": 50 })
    }
}

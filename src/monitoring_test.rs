// SPDX-License-Identifier: MIT

//! Unit tests for monitoring module

use super::{metrics::MetricsStore, monitoring::*, types::AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    routing::{get, post},
    Router,
};
use serde_json::{json, Map, Value};
use tower::ServiceExt;

fn test_app(monitoring: MonitoringStore) -> Router {
    let state = AppState {
        metrics: MetricsStore::new(),
        monitoring,
    };

    Router::new()
        .route("/", get(home_page))
        .route("/health", get(health_check))
        .route("/data", get(get_monitoring_data))
        .route("/data/update", post(update_monitoring_data))
        .with_state(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_home_page() {
    let app = test_app(MonitoringStore::new());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"Welcome to the HomePage!");
}

#[tokio::test]
async fn test_health_check() {
    let app = test_app(MonitoringStore::new());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"message": "Everything is OK!"}));
}

#[tokio::test]
async fn test_get_data_empty_store_returns_not_found() {
    let app = test_app(MonitoringStore::new());

    let response = app
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No monitoring data available");
}

#[tokio::test]
async fn test_get_data_returns_seeded_document() {
    let mut seed = Map::new();
    seed.insert("uptime".to_string(), json!(99.9));

    let app = test_app(MonitoringStore::with_seed(Some(seed)));

    let response = app
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"uptime": 99.9}));
}

#[tokio::test]
async fn test_update_then_get_round_trip() {
    let store = MonitoringStore::new();
    let app = test_app(store.clone());

    let update = Request::builder()
        .uri("/data/update")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status": "degraded", "checks": 3}"#))
        .unwrap();

    let response = app.clone().oneshot(update).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "degraded", "checks": 3})
    );

    let response = app
        .oneshot(Request::builder().uri("/data").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"status": "degraded", "checks": 3})
    );
}

#[tokio::test]
async fn test_update_replaces_whole_document() {
    let mut seed = Map::new();
    seed.insert("old".to_string(), json!(true));

    let store = MonitoringStore::with_seed(Some(seed));
    let app = test_app(store.clone());

    let update = Request::builder()
        .uri("/data/update")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"new": true}"#))
        .unwrap();

    let _ = app.oneshot(update).await.unwrap();

    let data = store.get().expect("document should be present");
    assert!(data.contains_key("new"));
    assert!(!data.contains_key("old"));
}

#[tokio::test]
async fn test_update_rejects_malformed_body() {
    let app = test_app(MonitoringStore::new());

    let update = Request::builder()
        .uri("/data/update")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(update).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejects_non_object_body() {
    let app = test_app(MonitoringStore::new());

    let update = Request::builder()
        .uri("/data/update")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("[1, 2, 3]"))
        .unwrap();

    let response = app.oneshot(update).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Invalid request: monitoring data must be a JSON object");
}

#[test]
fn test_store_get_none_when_empty() {
    let store = MonitoringStore::new();
    assert!(store.get().is_none());

    let mut doc = Map::new();
    doc.insert("k".to_string(), json!("v"));
    store.replace(doc);
    assert!(store.get().is_some());
}

mod common;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use httpmock::prelude::*;
use tower::ServiceExt;
use wakapi_card::routes::app_router;

async fn get(uri: &str, upstream_base_url: &str) -> (StatusCode, Option<String>, String) {
    let app = app_router(common::create_test_state(upstream_base_url));

    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn test_card_route() {
    let upstream = MockServer::start_async().await;
    common::mock_stats(
        &upstream,
        "alice",
        common::stats_body("alice", 87.3, &[("Rust", 7200.0, 100.0)]),
    )
    .await;

    let (status, content_type, body) =
        get("/api/stats?username=alice", &upstream.base_url()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/svg+xml; charset=utf-8"));
    assert!(body.contains("87% coding"));
}

#[tokio::test]
async fn test_card_route_trailing_slash() {
    let (status, _, body) = get("/api/stats/", "http://127.0.0.1:1").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("?username=yourname"));
}

#[tokio::test]
async fn test_health_route() {
    let (status, _, body) = get("/health", "https://wakapi.dev").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("healthy"));
}

#[tokio::test]
async fn test_unknown_route() {
    let (status, _, _) = get("/api/users", "https://wakapi.dev").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

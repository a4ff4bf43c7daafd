#![allow(dead_code)]

use axum::{Router, routing::get};
use httpmock::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;
use wakapi_card::api::handlers::card_handler;
use wakapi_card::application::services::CardService;
use wakapi_card::config::CachePolicy;
use wakapi_card::infrastructure::upstream::WakapiClient;
use wakapi_card::state::AppState;

/// `Basic base64("public:public")`
pub const PUBLIC_AUTHORIZATION: &str = "Basic cHVibGljOnB1YmxpYw==";

pub const DEFAULT_CACHE_CONTROL: &str =
    "public, max-age=0, s-maxage=1800, stale-while-revalidate=3600";

/// Text of the message node on an error card.
pub fn error_card_message(svg: &str) -> &str {
    svg.split_once(r##"fill="#F87171""##)
        .and_then(|(_, rest)| rest.split_once('>'))
        .and_then(|(_, rest)| rest.split_once("</text>"))
        .map(|(message, _)| message.trim())
        .unwrap_or_default()
}

pub fn stats_path(username: &str) -> String {
    format!("/api/compat/wakatime/v1/users/{}/stats/", username)
}

pub fn create_test_state(upstream_base_url: &str) -> AppState {
    let client = WakapiClient::new(upstream_base_url).unwrap();
    let card_service = Arc::new(CardService::new(Arc::new(client)));

    AppState::new(card_service, CachePolicy::default(), upstream_base_url)
}

pub fn card_app(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(card_handler))
        .with_state(state)
}

/// Upstream payload with the given languages as `(name, total_seconds, percent)`.
pub fn stats_body(username: &str, coding_percent: f64, languages: &[(&str, f64, f64)]) -> Value {
    let languages: Vec<Value> = languages
        .iter()
        .map(|(name, total_seconds, percent)| {
            json!({
                "name": name,
                "total_seconds": total_seconds,
                "percent": percent,
                "digital": "0:00",
                "text": "n/a"
            })
        })
        .collect();

    json!({
        "data": {
            "username": username,
            "human_readable_total": "42 hrs 7 mins",
            "categories": [
                {"name": "coding", "percent": coding_percent},
                {"name": "debugging", "percent": 100.0 - coding_percent}
            ],
            "languages": languages,
            "total_seconds": 151620,
            "human_readable_daily_average": "6 hrs 1 min"
        }
    })
}

/// Registers a successful stats response for `username`.
pub async fn mock_stats<'a>(server: &'a MockServer, username: &str, body: Value) -> httpmock::Mock<'a> {
    let path = stats_path(username);
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path(path)
                .header("authorization", PUBLIC_AUTHORIZATION);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(body);
        })
        .await
}

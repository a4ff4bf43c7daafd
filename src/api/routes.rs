//! API route configuration.

use crate::api::handlers::card_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public API routes.
///
/// # Endpoints
///
/// - `GET /stats?username={name}` - SVG stat card
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/stats", get(card_handler))
}

//! Handler for the SVG stat card.

use axum::{
    extract::{RawQuery, State},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::dto::card::CardParams;
use crate::api::response::SvgResponse;
use crate::domain::username::Username;
use crate::state::AppState;

/// Renders the stat card for `?username=`.
///
/// # Endpoint
///
/// `GET /api/stats?username={name}`
///
/// # Responses
///
/// Every response is `image/svg+xml; charset=utf-8`:
///
/// - **400**: missing, repeated or blank username (`?username=yourname` card)
/// - **400**: username outside `[A-Za-z0-9_-]{1,100}` (`Invalid username` card)
/// - **200**: upstream failure, rendered as an error card
/// - **200**: the stat card
///
/// Only 200 responses carry the `Cache-Control` header.
pub async fn card_handler(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let params = CardParams::from_query(query.as_deref());

    let username = match Username::parse(params.username()) {
        Ok(username) => username,
        Err(e) => {
            debug!("Rejected card request: {}", e);
            return e.into_response();
        }
    };

    let response = match state.card_service.render_card(&username).await {
        Ok(svg) => SvgResponse::ok(svg),
        Err(e) => {
            warn!(username = %username, error = %e, "Serving error card");
            e.into_svg_response()
        }
    };

    response
        .with_cache_control(state.cache.header_value())
        .into_response()
}

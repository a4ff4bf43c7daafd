//! Application error taxonomy.
//!
//! Every failure ends up as an SVG image: embedding pages load the card through
//! an `<img>` tag, which cannot display an HTTP error body. Client input errors
//! keep their 400 status, while upstream failures are reported with 200 so the
//! error card is still shown.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::response::SvgResponse;
use crate::card::templates::render_error_card;

/// Message shown when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Failed to fetch stats";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// `username` is absent, repeated, or blank.
    #[error("?username=yourname")]
    MissingUsername,

    /// `username` does not match `^[A-Za-z0-9_-]{1,100}$`.
    #[error("Invalid username")]
    InvalidUsername,

    /// Upstream answered with a non-2xx status.
    #[error("API error: {status}")]
    Upstream { status: u16 },

    /// Transport failure (DNS, connect, reset, body read).
    #[error("{0}")]
    Network(String),

    /// Upstream body is not the expected statistics JSON.
    #[error("{0}")]
    Parse(String),

    /// Template rendering failed.
    #[error("{0}")]
    Render(String),
}

impl AppError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }

    /// HTTP status used when this error is rendered as a response.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUsername | AppError::InvalidUsername => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. }
            | AppError::Network(_)
            | AppError::Parse(_)
            | AppError::Render(_) => StatusCode::OK,
        }
    }

    /// Returns true for errors caused by the request itself.
    ///
    /// Client errors never reach upstream and are not cacheable.
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }

    /// Text displayed on the error card.
    pub fn card_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    /// Renders this error as an error card with its status code.
    pub fn into_svg_response(self) -> SvgResponse {
        let body = render_error_card(&self.card_message());
        SvgResponse::new(self.status_code(), body)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_svg_response().into_response()
    }
}

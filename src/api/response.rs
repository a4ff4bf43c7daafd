//! SVG response type shared by the card handler and [`crate::error::AppError`].

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

/// Content type of every card response, regardless of status.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";

/// An SVG body with a status code and an optional `Cache-Control` value.
#[derive(Debug, Clone)]
pub struct SvgResponse {
    status: StatusCode,
    body: String,
    cache_control: Option<String>,
}

impl SvgResponse {
    pub fn new(status: StatusCode, body: String) -> Self {
        Self {
            status,
            body,
            cache_control: None,
        }
    }

    pub fn ok(body: String) -> Self {
        Self::new(StatusCode::OK, body)
    }

    pub fn with_cache_control(mut self, value: impl Into<String>) -> Self {
        self.cache_control = Some(value.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for SvgResponse {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(SVG_CONTENT_TYPE))],
            self.body,
        )
            .into_response();

        if let Some(value) = self.cache_control {
            match HeaderValue::try_from(value) {
                Ok(value) => {
                    response.headers_mut().insert(header::CACHE_CONTROL, value);
                }
                Err(e) => tracing::warn!("Invalid Cache-Control value: {}", e),
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_response_headers() {
        let response = SvgResponse::ok("<svg/>".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            SVG_CONTENT_TYPE
        );
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    }

    #[test]
    fn test_svg_response_with_cache_control() {
        let response = SvgResponse::new(StatusCode::BAD_REQUEST, "<svg/>".to_string())
            .with_cache_control("public, max-age=0")
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "public, max-age=0"
        );
    }
}

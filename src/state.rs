//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::CardService;
use crate::config::CachePolicy;

/// State shared by all request handlers.
///
/// Holds no per-request data; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub card_service: Arc<CardService>,
    pub cache: CachePolicy,
    pub upstream_base_url: String,
}

impl AppState {
    pub fn new(
        card_service: Arc<CardService>,
        cache: CachePolicy,
        upstream_base_url: impl Into<String>,
    ) -> Self {
        Self {
            card_service,
            cache,
            upstream_base_url: upstream_base_url.into(),
        }
    }
}

//! # wakapi-card
//!
//! SVG stat cards for WakaTime-compatible coding statistics, served with Axum.
//!
//! `GET /api/stats?username=alice` fetches the user's aggregate statistics from
//! a public Wakapi instance and renders total time, daily average, language
//! count and a two-column per-language breakdown as an SVG image that can be
//! embedded with an `<img>` tag.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Statistics entities, username validation, source trait
//! - **Application Layer** ([`application`]) - Fetch and render orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Upstream HTTP client
//! - **Card Rendering** ([`card`]) - Formatting, layout arithmetic and SVG templates
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Failure Handling
//!
//! The endpoint always answers with an SVG document. Invalid input yields a
//! 400 error card, upstream failures a 200 error card, so embedding pages never
//! show a broken image.
//!
//! ## Quick Start
//!
//! ```bash
//! export UPSTREAM_BASE_URL="https://wakapi.dev"  # Optional
//! cargo run
//! curl "http://localhost:3000/api/stats?username=alice"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod card;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CardService;
    pub use crate::config::CachePolicy;
    pub use crate::domain::entities::{CategoryUsage, LanguageUsage, UsageSnapshot};
    pub use crate::domain::repositories::StatsSource;
    pub use crate::domain::username::Username;
    pub use crate::error::AppError;
    pub use crate::infrastructure::upstream::WakapiClient;
    pub use crate::state::AppState;
}

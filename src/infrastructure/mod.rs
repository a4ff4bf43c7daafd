//! Infrastructure layer: adapters for external systems.
//!
//! - [`upstream`] - HTTP client for the WakaTime-compatible statistics API

pub mod upstream;

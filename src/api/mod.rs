//! HTTP API layer.
//!
//! Translates requests into card rendering and always answers with SVG.
//!
//! # Modules
//!
//! - [`dto`] - Query parameters and JSON responses
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`response`] - SVG response type
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

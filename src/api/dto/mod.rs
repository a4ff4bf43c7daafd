//! Data Transfer Objects for the HTTP API.
//!
//! - [`card`] - query parameters of the stat card endpoint
//! - [`health`] - health check response

pub mod card;
pub mod health;

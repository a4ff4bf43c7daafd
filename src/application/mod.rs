//! Application layer services.
//!
//! Services orchestrate domain operations: they consume the
//! [`crate::domain::repositories::StatsSource`] trait and hand finished SVG
//! documents to the HTTP handlers.
//!
//! - [`services::card_service::CardService`] - fetch statistics and render the stat card

pub mod services;

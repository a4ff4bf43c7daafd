//! Domain layer: statistics entities, input validation and data source traits.
//!
//! - [`entities`] - Usage statistics model
//! - [`username`] - Validated username newtype
//! - [`repositories`] - [`repositories::StatsSource`] trait implemented by infrastructure
//!
//! The domain layer has no dependencies on HTTP or rendering concerns.

pub mod entities;
pub mod repositories;
pub mod username;

//! Data access trait definitions for the domain layer.
//!
//! Implementations live in [`crate::infrastructure`]; mocks are generated
//! via `mockall` for unit tests.

pub mod stats_source;

pub use stats_source::StatsSource;

#[cfg(test)]
pub use stats_source::MockStatsSource;

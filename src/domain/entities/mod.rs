//! Core domain entities.
//!
//! - [`UsageSnapshot`] - statistics of one user as fetched from upstream
//! - [`LanguageUsage`] - time spent per language
//! - [`CategoryUsage`] - time share per activity category

pub mod usage;

pub use usage::{CategoryUsage, LanguageUsage, StatsEnvelope, UsageSnapshot};

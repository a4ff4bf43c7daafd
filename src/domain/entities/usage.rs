//! Usage statistics as returned by the upstream statistics API.

use serde::Deserialize;

/// Response envelope of `GET /api/compat/wakatime/v1/users/{user}/stats/`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsEnvelope {
    pub data: UsageSnapshot,
}

/// Aggregate coding statistics for one user.
///
/// Fetched once per request and never mutated afterwards. Unknown fields in
/// the upstream payload are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageSnapshot {
    pub username: String,
    pub human_readable_total: String,
    pub categories: Vec<CategoryUsage>,
    pub languages: Vec<LanguageUsage>,
    pub total_seconds: f64,
}

impl UsageSnapshot {
    /// Percent of tracked time in the category named exactly `coding`, or 0.
    pub fn coding_percent(&self) -> f64 {
        self.categories
            .iter()
            .find(|c| c.name == "coding")
            .map(|c| c.percent)
            .unwrap_or(0.0)
    }
}

/// Share of tracked time spent in one activity category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryUsage {
    pub name: String,
    pub percent: f64,
}

/// Time spent in a single language.
///
/// Percents across all languages of a snapshot are expected, not guaranteed,
/// to sum to roughly 100.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageUsage {
    pub name: String,
    pub total_seconds: f64,
    pub percent: f64,
}

impl LanguageUsage {
    pub fn new(name: impl Into<String>, total_seconds: f64, percent: f64) -> Self {
        Self {
            name: name.into(),
            total_seconds,
            percent,
        }
    }
}

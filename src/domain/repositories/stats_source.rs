//! Source of per-user usage statistics.

use crate::domain::entities::UsageSnapshot;
use crate::domain::username::Username;
use crate::error::AppError;
use async_trait::async_trait;

/// Fetches aggregate statistics for a user.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::WakapiClient`] - WakaTime-compatible HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Retrieves the statistics snapshot for `username`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] when the API answers with a non-2xx status,
    /// [`AppError::Network`] on transport failures and [`AppError::Parse`]
    /// when the body is not valid statistics JSON.
    async fn fetch_stats(&self, username: &Username) -> Result<UsageSnapshot, AppError>;
}

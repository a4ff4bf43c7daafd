//! Stat card rendering service.

use std::sync::Arc;

use tracing::info;

use crate::card::{RenderInput, render_stat_card};
use crate::domain::repositories::StatsSource;
use crate::domain::username::Username;
use crate::error::AppError;

/// Fetches a user's statistics and renders them as an SVG stat card.
pub struct CardService {
    source: Arc<dyn StatsSource>,
}

impl CardService {
    /// Creates a new card service backed by the given statistics source.
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    /// Renders the stat card for `username`.
    ///
    /// # Errors
    ///
    /// Propagates [`AppError::Upstream`], [`AppError::Network`] and
    /// [`AppError::Parse`] from the statistics source, and returns
    /// [`AppError::Render`] if the template fails.
    pub async fn render_card(&self, username: &Username) -> Result<String, AppError> {
        let snapshot = self.source.fetch_stats(username).await?;
        let input = RenderInput::from_snapshot(&snapshot);

        let svg = render_stat_card(&input)?;

        info!(
            username = %username,
            languages = input.language_count,
            displayed = input.left.len() + input.right.len(),
            "Rendered stat card"
        );

        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryUsage, LanguageUsage, UsageSnapshot};
    use crate::domain::repositories::MockStatsSource;

    fn snapshot() -> UsageSnapshot {
        UsageSnapshot {
            username: "alice".to_string(),
            human_readable_total: "10 hrs".to_string(),
            categories: vec![CategoryUsage {
                name: "coding".to_string(),
                percent: 87.3,
            }],
            languages: vec![
                LanguageUsage::new("Rust", 30000.0, 83.0),
                LanguageUsage::new("Go", 6000.0, 17.0),
            ],
            total_seconds: 36000.0,
        }
    }

    #[tokio::test]
    async fn test_render_card_success() {
        let mut mock_source = MockStatsSource::new();

        mock_source
            .expect_fetch_stats()
            .withf(|username| username.as_str() == "alice")
            .times(1)
            .returning(|_| Ok(snapshot()));

        let service = CardService::new(Arc::new(mock_source));
        let username = Username::parse(Some("alice")).unwrap();

        let svg = service.render_card(&username).await.unwrap();

        assert!(svg.contains("@alice"));
        assert!(svg.contains("87% coding"));
        assert!(svg.contains(">Rust<"));
        assert!(svg.contains(">Go<"));
    }

    #[tokio::test]
    async fn test_render_card_upstream_error() {
        let mut mock_source = MockStatsSource::new();

        mock_source
            .expect_fetch_stats()
            .times(1)
            .returning(|_| Err(AppError::Upstream { status: 404 }));

        let service = CardService::new(Arc::new(mock_source));
        let username = Username::parse(Some("ghost")).unwrap();

        let result = service.render_card(&username).await;

        assert!(matches!(result, Err(AppError::Upstream { status: 404 })));
    }

    #[tokio::test]
    async fn test_render_card_network_error() {
        let mut mock_source = MockStatsSource::new();

        mock_source
            .expect_fetch_stats()
            .times(1)
            .returning(|_| Err(AppError::network("connection reset")));

        let service = CardService::new(Arc::new(mock_source));
        let username = Username::parse(Some("alice")).unwrap();

        let err = service.render_card(&username).await.unwrap_err();

        assert_eq!(err.card_message(), "connection reset");
    }
}

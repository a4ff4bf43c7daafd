//! WakaTime-compatible statistics API client.

use async_trait::async_trait;
use base64::Engine as _;
use reqwest::header::AUTHORIZATION;
use tracing::{debug, warn};
use url::Url;

use crate::domain::entities::{StatsEnvelope, UsageSnapshot};
use crate::domain::repositories::StatsSource;
use crate::domain::username::Username;
use crate::error::AppError;

/// Default upstream host.
pub const DEFAULT_BASE_URL: &str = "https://wakapi.dev";

/// Public read-only credential accepted by the upstream API.
const PUBLIC_CREDENTIALS: &str = "public:public";

/// HTTP client for `GET /api/compat/wakatime/v1/users/{username}/stats/`.
///
/// Wraps a shared [`reqwest::Client`] so connections are pooled across
/// requests. No retries and no timeout beyond the client defaults.
#[derive(Clone)]
pub struct WakapiClient {
    client: reqwest::Client,
    base_url: Url,
    authorization: String,
}

impl WakapiClient {
    /// Creates a client for the given API base URL (e.g. `https://wakapi.dev`).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Network`] if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::network(format!("Invalid upstream URL: {e}")))?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::network(format!(
                "Invalid upstream URL: {base_url}"
            )));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("wakapi-card/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            authorization: basic_authorization(PUBLIC_CREDENTIALS),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds the statistics URL for a user.
    pub fn stats_url(&self, username: &Username) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "api",
                "compat",
                "wakatime",
                "v1",
                "users",
                username.as_str(),
                "stats",
                "",
            ]);
        }
        url
    }
}

/// Encodes `user:password` as an HTTP Basic authorization value.
fn basic_authorization(credentials: &str) -> String {
    format!(
        "Basic {}",
        base64::engine::general_purpose::STANDARD.encode(credentials)
    )
}

#[async_trait]
impl StatsSource for WakapiClient {
    async fn fetch_stats(&self, username: &Username) -> Result<UsageSnapshot, AppError> {
        let url = self.stats_url(username);
        debug!("Fetching stats from {}", url);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|e| {
                warn!("Upstream request for {} failed: {}", username, e);
                AppError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, username);
            return Err(AppError::Upstream {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let envelope: StatsEnvelope = serde_json::from_slice(&body).map_err(|e| {
            warn!("Upstream payload for {} is invalid: {}", username, e);
            AppError::parse(format!("Invalid stats payload: {e}"))
        })?;

        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn username(name: &str) -> Username {
        Username::parse(Some(name)).unwrap()
    }

    #[test]
    fn test_basic_authorization() {
        assert_eq!(
            basic_authorization("public:public"),
            "Basic cHVibGljOnB1YmxpYw=="
        );
    }

    #[test]
    fn test_stats_url() {
        let client = WakapiClient::new("https://wakapi.dev").unwrap();

        assert_eq!(
            client.stats_url(&username("alice")).as_str(),
            "https://wakapi.dev/api/compat/wakatime/v1/users/alice/stats/"
        );
    }

    #[test]
    fn test_stats_url_with_base_path() {
        let client = WakapiClient::new("http://localhost:8080/wakapi/").unwrap();

        assert_eq!(
            client.stats_url(&username("bob_1")).as_str(),
            "http://localhost:8080/wakapi/api/compat/wakatime/v1/users/bob_1/stats/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(WakapiClient::new("not a url").is_err());
        assert!(WakapiClient::new("mailto:someone@example.com").is_err());
    }
}

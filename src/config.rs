//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_BASE_URL` - Statistics API host (default: `https://wakapi.dev`)
//! - `CACHE_S_MAXAGE` - Shared cache freshness in seconds (default: 1800)
//! - `CACHE_STALE_WHILE_REVALIDATE` - Stale window in seconds (default: 3600)
//!
//! All variables are optional.

use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::infrastructure::upstream::DEFAULT_BASE_URL;

/// `Cache-Control` policy applied to every non-4xx card response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CachePolicy {
    pub s_maxage: u64,
    pub stale_while_revalidate: u64,
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            s_maxage: 1800,
            stale_while_revalidate: 3600,
        }
    }
}

impl CachePolicy {
    /// Browsers always revalidate; shared caches keep the card for `s_maxage`
    /// and may serve it stale while revalidating.
    pub fn header_value(&self) -> String {
        format!(
            "public, max-age=0, s-maxage={}, stale-while-revalidate={}",
            self.s_maxage, self.stale_while_revalidate
        )
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the WakaTime-compatible statistics API.
    pub upstream_base_url: String,
    pub cache: CachePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            upstream_base_url: DEFAULT_BASE_URL.to_string(),
            cache: CachePolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let upstream_base_url =
            env::var("UPSTREAM_BASE_URL").unwrap_or(defaults.upstream_base_url);

        let s_maxage = parse_var("CACHE_S_MAXAGE", defaults.cache.s_maxage)?;
        let stale_while_revalidate = parse_var(
            "CACHE_STALE_WHILE_REVALIDATE",
            defaults.cache.stale_while_revalidate,
        )?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            upstream_base_url,
            cache: CachePolicy {
                s_maxage,
                stale_while_revalidate,
            },
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `upstream_base_url` is not an HTTP(S) URL
    /// - `cache.s_maxage` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let upstream = Url::parse(&self.upstream_base_url).with_context(|| {
            format!(
                "UPSTREAM_BASE_URL is not a valid URL: '{}'",
                self.upstream_base_url
            )
        })?;
        if upstream.scheme() != "http" && upstream.scheme() != "https" {
            anyhow::bail!(
                "UPSTREAM_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.upstream_base_url
            );
        }

        if self.cache.s_maxage == 0 {
            anyhow::bail!("CACHE_S_MAXAGE must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.upstream_base_url);
        tracing::info!("  Cache-Control: {}", self.cache.header_value());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_var(name: &str, default: u64) -> Result<u64> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a non-negative integer, got '{value}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

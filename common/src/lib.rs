/*!
common/src/lib.rs

Shared configuration types for caristat.

This file provides:
- Config data structures (deserialized from TOML)
- An async loader for a TOML config file
- Resolved accessors that fill in the built-in defaults
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Base URL of the BPS Kota Medan website.
pub const DEFAULT_BASE_URL: &str = "https://medankota.bps.go.id";

/// Desktop browser User-Agent sent by default; the site serves some
/// navigation blocks only to browser-looking clients.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Pause between statistics-page requests (informal rate limiting).
pub const DEFAULT_DELAY_MS: u64 = 500;

/// Per-request timeout.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Result cap applied after deduplication.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Target site configuration section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL of the BPS instance (e.g. "https://medankota.bps.go.id")
    pub base_url: Option<String>,
    /// User-Agent header sent with every request
    pub user_agent: Option<String>,
}

/// Politeness / fetching configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolitenessConfig {
    pub delay_ms: Option<u64>,
    pub fetch_timeout_seconds: Option<u64>,
    pub max_response_bytes: Option<u64>,
}

/// Search tuning
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    pub max_results: Option<usize>,
}

/// Top-level application configuration (deserialized from caristat.toml)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    pub politeness: Option<PolitenessConfig>,
    pub search: Option<SearchConfig>,
}

impl Config {
    /// Load configuration from a TOML file asynchronously.
    ///
    /// Example:
    ///   let cfg = Config::from_file("caristat.toml").await?;
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = tokio::fs::read_to_string(path.as_ref())
            .await
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let cfg: Config = toml::from_str(&data).context("Failed to parse TOML configuration")?;
        Ok(cfg)
    }

    /// Base URL of the site to search.
    pub fn base_url(&self) -> &str {
        self.site.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// User-Agent header for every request.
    pub fn user_agent(&self) -> &str {
        self.site.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Pause between statistics-page requests, in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.politeness
            .as_ref()
            .and_then(|p| p.delay_ms)
            .unwrap_or(DEFAULT_DELAY_MS)
    }

    /// Per-request timeout, in seconds.
    pub fn fetch_timeout_seconds(&self) -> u64 {
        self.politeness
            .as_ref()
            .and_then(|p| p.fetch_timeout_seconds)
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
    }

    /// Optional Content-Length cap for fetched pages. `None` disables the check.
    pub fn max_response_bytes(&self) -> Option<u64> {
        self.politeness.as_ref().and_then(|p| p.max_response_bytes)
    }

    /// Maximum number of links to emit.
    pub fn max_results(&self) -> usize {
        self.search
            .as_ref()
            .and_then(|s| s.max_results)
            .unwrap_or(DEFAULT_MAX_RESULTS)
    }
}

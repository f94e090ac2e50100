use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Builds the shared HTTP client. One client is reused for the whole run so
/// every request rides the same session.
pub fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
        .context("failed to build reqwest client")
}

/// Fetches a single page and returns the body as text.
///
/// Non-success statuses are errors. When `max_bytes` is set, responses that
/// announce a larger Content-Length are refused before the body is read.
pub async fn fetch_page(client: &Client, url: &Url, max_bytes: Option<u64>) -> Result<String> {
    let response = client
        .get(url.clone())
        .send()
        .await
        .with_context(|| format!("failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("fetch of {} failed with status: {}", url, status);
    }

    if let (Some(cap), Some(length)) = (max_bytes, response.content_length()) {
        if length > cap {
            anyhow::bail!(
                "response from {} too large: {} bytes (cap {})",
                url,
                length,
                cap
            );
        }
    }

    response
        .text()
        .await
        .with_context(|| format!("failed to read response body from {}", url))
}

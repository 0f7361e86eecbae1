use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

/// Shared HTTP client with a fixed per-request timeout. No retries.
pub fn build_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")
}

/// Fetch one blocklist as text. Network failure, timeout, and non-2xx
/// status all surface as an error for the caller to inspect.
pub async fn fetch_text(client: &Client, url: &str) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request to {} failed", url))?
        .error_for_status()
        .with_context(|| format!("{} returned an error status", url))?;

    response
        .text()
        .await
        .with_context(|| format!("Failed to read body from {}", url))
}

//! HTTP client for the domain lookup service

use crate::api::DomainApi;
use crate::config::{ShellConfig, DEFAULT_API_URL};
use crate::error::{Result, ShellError};
use crate::types::LookupResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};

/// Lookup service client
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the default service endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_API_URL, Duration::from_secs(30))
    }

    /// Create a client from shell configuration
    pub fn from_config(config: &ShellConfig) -> Result<Self> {
        Self::with_base_url(&config.api_base_url, config.request_timeout)
    }

    /// Create a client for a custom endpoint
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("domainshell/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ShellError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<LookupResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let start = Instant::now();

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                ShellError::network(
                    format!("Failed to reach lookup service: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match status.as_u16() {
                429 => "Rate limit exceeded. Please try again later".to_string(),
                500..=599 => format!("Lookup service is having trouble ({})", status),
                _ if body.trim().is_empty() => format!("Request failed ({})", status),
                _ => format!("Request failed ({}): {}", status, body.trim()),
            };
            return Err(ShellError::network(message, Some(status.as_u16()), Some(url)));
        }

        let body = response.text().await?;
        let decoded: LookupResponse = serde_json::from_str(&body)
            .map_err(|e| ShellError::parse(e.to_string(), Some(body)))?;

        tracing::debug!(
            endpoint = %endpoint,
            records = decoded.data.len(),
            duration_ms = %start.elapsed().as_millis(),
            "Lookup request completed"
        );

        Ok(decoded)
    }
}

#[async_trait]
impl DomainApi for ApiClient {
    async fn check_availability(&self, domain: &str) -> Result<LookupResponse> {
        self.fetch("check-availability", &[("domain[]", domain)]).await
    }

    async fn suggest_domains(&self, domain: &str) -> Result<LookupResponse> {
        self.fetch("suggest", &[("domain", domain)]).await
    }
}

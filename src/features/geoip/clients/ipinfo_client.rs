use async_trait::async_trait;

use super::provider::{GeoProvider, ProviderError};
use crate::core::config::ProviderConfig;

/// HTTP client for ipinfo.io-compatible geolocation APIs
pub struct IpInfoClient {
    http_client: reqwest::Client,
    url_template: String,
}

impl IpInfoClient {
    pub fn new(config: &ProviderConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            http_client,
            url_template: config.url_template.clone(),
        })
    }

    /// Expand the URL template for one address, verbatim
    pub fn url_for(&self, ip: &str) -> String {
        self.url_template.replace(ProviderConfig::IP_PLACEHOLDER, ip)
    }
}

#[async_trait]
impl GeoProvider for IpInfoClient {
    async fn fetch(&self, ip: &str) -> Result<Vec<u8>, ProviderError> {
        let url = self.url_for(ip);
        tracing::debug!("Geolocation lookup: {} -> {}", ip, url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            tracing::error!("Geolocation request failed: {:?}", e);
            ProviderError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geolocation provider returned status {} for {}", status, ip);
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read geolocation response body: {:?}", e);
            ProviderError::Transport(e.to_string())
        })?;

        Ok(body.to_vec())
    }

    fn name(&self) -> &'static str {
        "ipinfo"
    }
}

use async_trait::async_trait;
use thiserror::Error;

/// Why the provider gave no body
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Connection refused, DNS failure, TLS failure, or the body could not be read.
    #[error("provider request failed: {0}")]
    Transport(String),

    /// Any status outside 2xx. 4xx and 5xx are not distinguished.
    #[error("provider returned status {0}")]
    Status(u16),
}

/// Outbound geolocation lookup.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait GeoProvider: Send + Sync {
    /// Fetch the raw response body for `ip`, an already validated address
    /// in the caller's own spelling.
    async fn fetch(&self, ip: &str) -> Result<Vec<u8>, ProviderError>;

    /// Provider name for logs
    fn name(&self) -> &'static str;
}

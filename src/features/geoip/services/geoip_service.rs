use std::net::IpAddr;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::geoip::clients::{GeoProvider, ProviderError};
use crate::features::geoip::dtos::GeoRecordDto;
use crate::features::geoip::models::GeoRecord;
use crate::features::geoip::repositories::GeoRecordStore;

/// Looks addresses up with the provider and records every successful answer.
///
/// Holds no mutable state of its own. Every call performs a fresh outbound
/// request; repeated lookups for one address produce independent rows.
pub struct GeoIpService {
    provider: Arc<dyn GeoProvider>,
    store: Arc<dyn GeoRecordStore>,
}

impl GeoIpService {
    pub fn new(provider: Arc<dyn GeoProvider>, store: Arc<dyn GeoRecordStore>) -> Self {
        Self { provider, store }
    }

    /// Validate `raw_ip`, fetch its geolocation, store it and return the stored row.
    ///
    /// If the insert fails the provider has already been queried; nothing
    /// compensates for that and a retry repeats the outbound call.
    pub async fn lookup_and_store(&self, raw_ip: &str) -> Result<GeoRecord> {
        // Validation only; the provider receives the address as the caller wrote it
        raw_ip
            .parse::<IpAddr>()
            .map_err(|_| AppError::InvalidInput(format!("Invalid IP address: {}", raw_ip)))?;

        let body = self.provider.fetch(raw_ip).await.map_err(|e| match e {
            ProviderError::Transport(msg) => AppError::UpstreamUnavailable(format!(
                "{} lookup for {} failed: {}",
                self.provider.name(),
                raw_ip,
                msg
            )),
            ProviderError::Status(status) => AppError::NotFound(format!(
                "No geolocation data found for {} (provider status {})",
                raw_ip, status
            )),
        })?;

        let dto = Self::decode(&body).map_err(|e| {
            tracing::error!("Failed to decode geolocation response for {}: {}", raw_ip, e);
            AppError::Parse(format!("Invalid geolocation response for {}: {}", raw_ip, e))
        })?;

        let record = self.store.insert(&dto).await?;

        tracing::info!("Geo record stored: id={}, ip={}", record.id, record.ip);

        Ok(record)
    }

    /// Every stored record, in store order
    pub async fn list_all(&self) -> Result<Vec<GeoRecord>> {
        self.store.list_all().await
    }

    /// Empty bodies, `null` and non-objects are all rejected by the struct decoder.
    fn decode(body: &[u8]) -> serde_json::Result<GeoRecordDto> {
        serde_json::from_slice(body)
    }
}

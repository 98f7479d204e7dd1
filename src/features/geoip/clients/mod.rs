mod ipinfo_client;
mod provider;

pub use ipinfo_client::IpInfoClient;
pub use provider::{GeoProvider, ProviderError};

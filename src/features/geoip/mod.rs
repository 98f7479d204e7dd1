//! IP geolocation lookup feature.
//!
//! Looks an address up with the configured geolocation provider, stores
//! every successful answer, and lists the stored history.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | GET | `/{ip}` | No | Look up, store and return geolocation for `ip` |
//! | GET | `/all` | No | List every stored lookup |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use clients::{GeoProvider, IpInfoClient};
pub use repositories::PgGeoRecordStore;
pub use services::GeoIpService;

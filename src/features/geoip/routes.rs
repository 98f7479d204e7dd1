use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::geoip::handlers;
use crate::features::geoip::services::GeoIpService;

/// Create routes for the geoip feature
///
/// `/all` is a static segment, so it takes precedence over the `{ip}` capture.
pub fn routes(service: Arc<GeoIpService>) -> Router {
    Router::new()
        .route("/all", get(handlers::list_all))
        .route("/{ip}", get(handlers::lookup_ip))
        .with_state(service)
}

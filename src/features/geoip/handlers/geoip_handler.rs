use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::geoip::dtos::GeoRecordDto;
use crate::features::geoip::services::GeoIpService;

/// Look up geolocation for an IP address
///
/// Queries the geolocation provider, stores the answer and returns it.
/// Every call performs a fresh lookup, even for addresses seen before.
#[utoipa::path(
    get,
    path = "/{ip}",
    params(
        ("ip" = String, Path, description = "IPv4 or IPv6 address")
    ),
    responses(
        (status = 200, description = "Geolocation found and stored", body = GeoRecordDto),
        (status = 400, description = "Not a valid IP address"),
        (status = 404, description = "Provider had no data for this address"),
        (status = 500, description = "Provider unreachable, unreadable response or database error")
    ),
    tag = "geoip"
)]
pub async fn lookup_ip(
    State(service): State<Arc<GeoIpService>>,
    Path(ip): Path<String>,
) -> Result<Json<GeoRecordDto>> {
    let record = service.lookup_and_store(&ip).await?;
    Ok(Json(record.into()))
}

/// List every stored lookup
#[utoipa::path(
    get,
    path = "/all",
    responses(
        (status = 200, description = "All stored lookups", body = Vec<GeoRecordDto>),
        (status = 500, description = "Database error")
    ),
    tag = "geoip"
)]
pub async fn list_all(State(service): State<Arc<GeoIpService>>) -> Result<Json<Vec<GeoRecordDto>>> {
    let records = service.list_all().await?;
    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    use crate::features::geoip::clients::ProviderError;
    use crate::features::geoip::routes;
    use crate::features::geoip::services::GeoIpService;
    use crate::features::geoip::dtos::GeoRecordDto;
    use crate::shared::test_helpers::{
        google_dns_dto, FakeGeoProvider, FakeGeoRecordStore, GOOGLE_DNS_BODY,
    };
    use std::sync::Arc;

    fn server(provider: FakeGeoProvider, store: FakeGeoRecordStore) -> TestServer {
        let service = Arc::new(GeoIpService::new(Arc::new(provider), Arc::new(store)));
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_lookup_returns_record_without_id() {
        let server = server(
            FakeGeoProvider::ok(GOOGLE_DNS_BODY),
            FakeGeoRecordStore::default(),
        );

        let response = server.get("/8.8.8.8").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body.get("id").is_none());
        assert_eq!(
            body,
            serde_json::from_str::<Value>(GOOGLE_DNS_BODY).unwrap()
        );
    }

    #[tokio::test]
    async fn test_lookup_invalid_ip_is_bad_request() {
        let server = server(
            FakeGeoProvider::ok(GOOGLE_DNS_BODY),
            FakeGeoRecordStore::default(),
        );

        let response = server.get("/not-an-ip").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Invalid IP address: not-an-ip");
    }

    #[tokio::test]
    async fn test_lookup_provider_status_is_not_found() {
        let server = server(
            FakeGeoProvider::failing(ProviderError::Status(404)),
            FakeGeoRecordStore::default(),
        );

        server
            .get("/8.8.8.8")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_lookup_internal_failures_hide_details() {
        let cases = [
            (
                FakeGeoProvider::failing(ProviderError::Transport("dns error".to_string())),
                FakeGeoRecordStore::default(),
            ),
            (FakeGeoProvider::ok("garbage"), FakeGeoRecordStore::default()),
            (
                FakeGeoProvider::ok(GOOGLE_DNS_BODY),
                FakeGeoRecordStore::failing(),
            ),
        ];

        for (provider, store) in cases {
            let response = server(provider, store).get("/8.8.8.8").await;

            response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
            let text = response.text();
            assert!(!text.contains("dns error"));
            assert!(!text.contains("garbage"));
            assert!(!text.contains("pool timed out"));
        }
    }

    #[tokio::test]
    async fn test_list_all_empty() {
        let server = server(
            FakeGeoProvider::ok(GOOGLE_DNS_BODY),
            FakeGeoRecordStore::default(),
        );

        let response = server.get("/all").await;

        response.assert_status_ok();
        response.assert_json(&serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_list_all_after_lookups() {
        let server = server(
            FakeGeoProvider::ok(GOOGLE_DNS_BODY),
            FakeGeoRecordStore::default(),
        );

        server.get("/8.8.8.8").await.assert_status_ok();
        server.get("/8.8.8.8").await.assert_status_ok();

        let records: Vec<GeoRecordDto> = server.get("/all").await.json();
        assert_eq!(records, vec![google_dns_dto(), google_dns_dto()]);
    }

    #[tokio::test]
    async fn test_list_all_store_failure_is_server_error() {
        let server = server(
            FakeGeoProvider::ok(GOOGLE_DNS_BODY),
            FakeGeoRecordStore::failing(),
        );

        server
            .get("/all")
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

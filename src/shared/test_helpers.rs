//! Fakes for the provider and store capabilities.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::error::{AppError, Result};
use crate::features::geoip::clients::{GeoProvider, ProviderError};
use crate::features::geoip::dtos::GeoRecordDto;
use crate::features::geoip::models::GeoRecord;
use crate::features::geoip::repositories::GeoRecordStore;

pub const GOOGLE_DNS_BODY: &str = r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California","country":"US","loc":"37.4056,-122.0775","org":"AS15169 Google LLC","postal":"94043","timezone":"America/Los_Angeles","readme":"https://ipinfo.io/missingauth"}"#;

pub fn google_dns_dto() -> GeoRecordDto {
    GeoRecordDto {
        ip: "8.8.8.8".to_string(),
        city: "Mountain View".to_string(),
        region: "California".to_string(),
        country: "US".to_string(),
        loc: "37.4056,-122.0775".to_string(),
        org: "AS15169 Google LLC".to_string(),
        postal: "94043".to_string(),
        timezone: "America/Los_Angeles".to_string(),
        readme: "https://ipinfo.io/missingauth".to_string(),
    }
}

/// Provider returning a canned outcome and counting calls
pub struct FakeGeoProvider {
    outcome: std::result::Result<Vec<u8>, ProviderError>,
    calls: AtomicUsize,
    last_ip: Mutex<Option<String>>,
}

impl FakeGeoProvider {
    pub fn ok(body: &str) -> Self {
        Self::with_outcome(Ok(body.as_bytes().to_vec()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with_outcome(Err(error))
    }

    fn with_outcome(outcome: std::result::Result<Vec<u8>, ProviderError>) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_ip: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_ip(&self) -> Option<String> {
        self.last_ip.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoProvider for FakeGeoProvider {
    async fn fetch(&self, ip: &str) -> std::result::Result<Vec<u8>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_ip.lock().unwrap() = Some(ip.to_string());
        self.outcome.clone()
    }

    fn name(&self) -> &'static str {
        "fake"
    }
}

/// In-memory store with sequential ids
#[derive(Default)]
pub struct FakeGeoRecordStore {
    rows: Mutex<Vec<GeoRecord>>,
    fail: bool,
}

impl FakeGeoRecordStore {
    /// Store whose every operation fails
    pub fn failing() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows(&self) -> Vec<GeoRecord> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoRecordStore for FakeGeoRecordStore {
    async fn insert(&self, record: &GeoRecordDto) -> Result<GeoRecord> {
        if self.fail {
            return Err(AppError::Persistence(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.rows.lock().unwrap();
        let dto = record.clone();
        let row = GeoRecord {
            id: rows.len() as i32 + 1,
            ip: dto.ip,
            city: dto.city,
            region: dto.region,
            country: dto.country,
            loc: dto.loc,
            org: dto.org,
            postal: dto.postal,
            timezone: dto.timezone,
            readme: dto.readme,
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn list_all(&self) -> Result<Vec<GeoRecord>> {
        if self.fail {
            return Err(AppError::Persistence(sqlx::Error::PoolTimedOut));
        }

        Ok(self.rows())
    }
}

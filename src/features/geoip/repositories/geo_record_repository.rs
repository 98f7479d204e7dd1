use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::geoip::dtos::GeoRecordDto;
use crate::features::geoip::models::GeoRecord;

/// Persistence for lookup results.
///
/// Each insert is a single statement; no transaction spans calls.
#[async_trait]
pub trait GeoRecordStore: Send + Sync {
    /// Insert one row and return it with its newly assigned id.
    async fn insert(&self, record: &GeoRecordDto) -> Result<GeoRecord>;

    /// Every stored row in the store's natural scan order.
    async fn list_all(&self) -> Result<Vec<GeoRecord>>;
}

/// Postgres-backed store over the `geo_ip_infos` table
pub struct PgGeoRecordStore {
    pool: PgPool,
}

impl PgGeoRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GeoRecordStore for PgGeoRecordStore {
    async fn insert(&self, record: &GeoRecordDto) -> Result<GeoRecord> {
        sqlx::query_as::<_, GeoRecord>(
            r#"
            INSERT INTO geo_ip_infos (ip, city, region, country, loc, org, postal, timezone, readme)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, ip, city, region, country, loc, org, postal, timezone, readme
            "#,
        )
        .bind(&record.ip)
        .bind(&record.city)
        .bind(&record.region)
        .bind(&record.country)
        .bind(&record.loc)
        .bind(&record.org)
        .bind(&record.postal)
        .bind(&record.timezone)
        .bind(&record.readme)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert geo record for {}: {:?}", record.ip, e);
            AppError::Persistence(e)
        })
    }

    async fn list_all(&self) -> Result<Vec<GeoRecord>> {
        sqlx::query_as::<_, GeoRecord>(
            r#"
            SELECT id, ip, city, region, country, loc, org, postal, timezone, readme
            FROM geo_ip_infos
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list geo records: {:?}", e);
            AppError::Persistence(e)
        })
    }
}

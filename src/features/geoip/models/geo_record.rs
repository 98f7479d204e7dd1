use sqlx::FromRow;

use crate::features::geoip::dtos::GeoRecordDto;

/// Database model for a stored lookup
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct GeoRecord {
    /// Assigned by the store on insert
    pub id: i32,
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub loc: String,
    pub org: String,
    pub postal: String,
    pub timezone: String,
    pub readme: String,
}

impl From<GeoRecord> for GeoRecordDto {
    fn from(r: GeoRecord) -> Self {
        Self {
            ip: r.ip,
            city: r.city,
            region: r.region,
            country: r.country,
            loc: r.loc,
            org: r.org,
            postal: r.postal,
            timezone: r.timezone,
            readme: r.readme,
        }
    }
}

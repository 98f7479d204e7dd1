use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Geolocation result as returned by the provider and as served to callers.
///
/// Every field is passed through untouched. Fields the provider omits or
/// sends as `null` decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct GeoRecordDto {
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "8.8.8.8")]
    pub ip: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "Mountain View")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "California")]
    pub region: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "US")]
    pub country: String,
    /// "latitude,longitude"
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "37.4056,-122.0775")]
    pub loc: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "AS15169 Google LLC")]
    pub org: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "94043")]
    pub postal: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "America/Los_Angeles")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_empty")]
    #[schema(example = "https://ipinfo.io/missingauth")]
    pub readme: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

use utoipa::{Modify, OpenApi};

use crate::features::geoip::{dtos as geoip_dtos, handlers as geoip_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        geoip_handlers::lookup_ip,
        geoip_handlers::list_all,
    ),
    components(
        schemas(
            geoip_dtos::GeoRecordDto,
        )
    ),
    tags(
        (name = "geoip", description = "IP geolocation lookup and stored history"),
    ),
    info(
        title = "GeoIP Service API",
        version = "0.1.0",
        description = "IP geolocation lookup and history",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

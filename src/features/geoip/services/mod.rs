mod geoip_service;

pub use geoip_service::GeoIpService;

mod geoip_handler;

pub use geoip_handler::*;

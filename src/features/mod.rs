//! Features layer - one module per API surface

pub mod geoip;

mod geo_record;

pub use geo_record::GeoRecord;

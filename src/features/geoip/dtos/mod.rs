mod geo_record_dto;

pub use geo_record_dto::GeoRecordDto;

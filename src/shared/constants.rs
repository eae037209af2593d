/// Endpoint serving the alphabetical monument name list
pub const MONUMENT_NAMES_PATH: &str = "/api/monuments";

/// Endpoint serving every monument as a GeoJSON FeatureCollection
pub const MONUMENT_GEOJSON_PATH: &str = "/api/monuments/geojson";

/// Media type for GeoJSON responses (RFC 7946)
pub const GEOJSON_CONTENT_TYPE: &str = "application/geo+json";

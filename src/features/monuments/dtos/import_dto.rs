use serde::Deserialize;
use serde_json::Value;

use crate::features::monuments::dtos::MonumentPropertiesDto;
use crate::shared::geojson::Geometry;

/// Top level of the import file. Features stay raw so each one can be
/// reported by index when it fails to parse.
#[derive(Debug, Deserialize)]
pub struct SourceFeatureCollection {
    pub features: Vec<Value>,
}

/// One feature of the import file. `type` and extra properties are ignored.
#[derive(Debug, Deserialize)]
pub struct SourceFeature {
    pub properties: MonumentPropertiesDto,
    pub geometry: Geometry,
}

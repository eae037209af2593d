use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::monuments::models::{MonumentGeoJsonRow, MonumentName};
use crate::shared::geojson::{Feature, FeatureCollection, Geometry};

/// Entry of the alphabetical monument list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MonumentNameDto {
    /// Display name
    #[schema(example = "Obelisk")]
    pub name: String,
}

impl From<MonumentName> for MonumentNameDto {
    fn from(row: MonumentName) -> Self {
        Self { name: row.name }
    }
}

/// Feature properties, both in the import file and in the map export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct MonumentPropertiesDto {
    /// Display name (required, non-empty)
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    #[schema(example = "Obelisk")]
    pub name: String,

    /// Path or URL of the display image
    #[validate(length(max = 255, message = "Image must not exceed 255 characters"))]
    #[schema(example = "obelisk.jpg")]
    pub image: String,
}

pub type MonumentFeature = Feature<MonumentPropertiesDto>;

pub type MonumentFeatureCollection = FeatureCollection<MonumentPropertiesDto>;

impl MonumentGeoJsonRow {
    /// Re-embed the stored geometry text as a parsed geometry object.
    pub fn into_feature(self) -> Result<MonumentFeature, serde_json::Error> {
        let geometry = Geometry::from_geojson_str(&self.geom)?;
        Ok(Feature::new(
            MonumentPropertiesDto {
                name: self.name,
                image: self.image,
            },
            geometry,
        ))
    }
}

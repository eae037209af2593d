//! GeoJSON containers used for the monument import file and the map export.
//!
//! Geometries are carried as opaque JSON objects. Imported points are reduced to
//! a [`GeoPoint`] and written with `ST_MakePoint`; exported geometries come back
//! from PostGIS as `ST_AsGeoJSON` text and are passed through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use utoipa::ToSchema;

/// WGS84 longitude/latitude, the spatial reference of the `monuments.geom` column
pub const SRID_WGS84: i32 = 4326;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeatureCollectionType {
    FeatureCollection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum FeatureType {
    Feature,
}

/// An ordered list of features
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeatureCollection<P> {
    #[serde(rename = "type")]
    pub kind: FeatureCollectionType,
    pub features: Vec<Feature<P>>,
}

impl<P> FeatureCollection<P> {
    pub fn new(features: Vec<Feature<P>>) -> Self {
        Self {
            kind: FeatureCollectionType::FeatureCollection,
            features,
        }
    }
}

/// A geometry paired with arbitrary properties
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Feature<P> {
    #[serde(rename = "type")]
    pub kind: FeatureType,
    pub properties: P,
    #[schema(value_type = Object)]
    pub geometry: Geometry,
}

impl<P> Feature<P> {
    pub fn new(properties: P, geometry: Geometry) -> Self {
        Self {
            kind: FeatureType::Feature,
            properties,
            geometry,
        }
    }
}

/// A GeoJSON geometry object, kept as parsed JSON and never interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Geometry(Map<String, Value>);

impl Geometry {
    /// Parse geometry text such as the output of `ST_AsGeoJSON`.
    pub fn from_geojson_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn geometry_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("geometry has no type")]
    MissingType,

    #[error("geometry type must be Point, got {0}")]
    NotAPoint(String),

    #[error("point coordinates must be 2 or 3 finite numbers")]
    InvalidCoordinates,
}

/// Longitude/latitude pair in [`SRID_WGS84`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub const SRID: i32 = SRID_WGS84;

    /// Read a GeoJSON Point. An altitude, if present, is dropped: the store
    /// column is 2D.
    pub fn from_geometry(geometry: &Geometry) -> Result<Self, GeometryError> {
        match geometry.geometry_type() {
            Some("Point") => {}
            Some(other) => return Err(GeometryError::NotAPoint(other.to_string())),
            None => return Err(GeometryError::MissingType),
        }

        let coordinates: Vec<f64> = geometry
            .0
            .get("coordinates")
            .and_then(Value::as_array)
            .ok_or(GeometryError::InvalidCoordinates)?
            .iter()
            .map(|c| c.as_f64().filter(|v| v.is_finite()))
            .collect::<Option<_>>()
            .ok_or(GeometryError::InvalidCoordinates)?;

        match coordinates.as_slice() {
            [longitude, latitude] | [longitude, latitude, _] => Ok(Self {
                longitude: *longitude,
                latitude: *latitude,
            }),
            _ => Err(GeometryError::InvalidCoordinates),
        }
    }

    /// 2D GeoJSON Point for this location
    pub fn to_geometry(&self) -> Geometry {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from("Point"));
        map.insert(
            "coordinates".to_string(),
            Value::from(vec![self.longitude, self.latitude]),
        );
        Geometry(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn geometry(value: Value) -> Geometry {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_point_is_accepted() {
        let point = GeoPoint::from_geometry(&geometry(
            json!({"type": "Point", "coordinates": [2.2945, 48.8584]}),
        ))
        .unwrap();

        assert_eq!(point.longitude, 2.2945);
        assert_eq!(point.latitude, 48.8584);
        assert_eq!(GeoPoint::SRID, 4326);
    }

    #[test]
    fn test_point_with_altitude_is_flattened() {
        let point = GeoPoint::from_geometry(&geometry(
            json!({"type": "Point", "coordinates": [12.4922, 41.8902, 30.0]}),
        ))
        .unwrap();

        assert_eq!(
            point.to_geometry(),
            geometry(json!({"type": "Point", "coordinates": [12.4922, 41.8902]}))
        );
    }

    #[test]
    fn test_non_point_is_rejected() {
        let result = GeoPoint::from_geometry(&geometry(
            json!({"type": "LineString", "coordinates": [[0.0, 0.0], [1.0, 1.0]]}),
        ));
        assert_eq!(
            result,
            Err(GeometryError::NotAPoint("LineString".to_string()))
        );
    }

    #[test]
    fn test_bad_coordinates_are_rejected() {
        for coordinates in [json!([1.0]), json!(["a", "b"]), json!("1,2"), json!([1, 2, 3, 4])] {
            let result = GeoPoint::from_geometry(&geometry(
                json!({"type": "Point", "coordinates": coordinates}),
            ));
            assert_eq!(result, Err(GeometryError::InvalidCoordinates));
        }
    }

    #[test]
    fn test_untyped_geometry_is_rejected() {
        let result = GeoPoint::from_geometry(&geometry(json!({"coordinates": [1.0, 2.0]})));
        assert_eq!(result, Err(GeometryError::MissingType));
    }

    #[test]
    fn test_geometry_must_be_an_object() {
        assert!(Geometry::from_geojson_str("[1, 2]").is_err());
        assert!(Geometry::from_geojson_str("not json").is_err());
    }

    #[test]
    fn test_geometry_text_survives_store_format() {
        // ST_AsGeoJSON output, compact with no spaces
        let text = r#"{"type":"Point","coordinates":[2.2945,48.8584]}"#;
        let geometry = Geometry::from_geojson_str(text).unwrap();

        assert_eq!(geometry.geometry_type(), Some("Point"));
        assert_eq!(
            serde_json::to_value(&geometry).unwrap(),
            serde_json::from_str::<Value>(text).unwrap()
        );
    }

    #[test]
    fn test_feature_collection_shape() {
        let collection = FeatureCollection::new(vec![Feature::new(
            json!({"name": "Obelisk"}),
            geometry(json!({"type": "Point", "coordinates": [2.2945, 48.8584]})),
        )]);

        assert_eq!(
            serde_json::to_value(&collection).unwrap(),
            json!({
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"name": "Obelisk"},
                    "geometry": {"type": "Point", "coordinates": [2.2945, 48.8584]}
                }]
            })
        );
    }
}

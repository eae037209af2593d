use sqlx::FromRow;

use crate::shared::geojson::GeoPoint;

/// Row to insert; `location` becomes a 2D point via `ST_MakePoint`
#[derive(Debug, Clone)]
pub struct NewMonument {
    pub name: String,
    pub image: String,
    pub location: GeoPoint,
}

/// Name-only projection, ordered by name
#[derive(Debug, Clone, FromRow, PartialEq, Eq)]
pub struct MonumentName {
    pub name: String,
}

/// Monument row with its geometry rendered by `ST_AsGeoJSON`
#[derive(Debug, Clone, FromRow)]
pub struct MonumentGeoJsonRow {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub geom: String,
}

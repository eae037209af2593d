use std::path::Path;
use std::sync::Arc;

use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::monuments::dtos::{SourceFeature, SourceFeatureCollection};
use crate::features::monuments::models::NewMonument;
use crate::features::monuments::services::MonumentRepository;
use crate::shared::geojson::GeoPoint;

/// Replaces the monuments table with the contents of a GeoJSON file
pub struct MonumentLoader {
    repository: Arc<dyn MonumentRepository>,
}

impl MonumentLoader {
    pub fn new(repository: Arc<dyn MonumentRepository>) -> Self {
        Self { repository }
    }

    /// Reload from the FeatureCollection at `path`, returning the number of rows inserted.
    ///
    /// An unreadable file is reported before anything is deleted.
    pub async fn reload_from_path(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let geojson = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| AppError::SourceFile {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!("Reloading monuments from {}", path.display());
        self.reload_from_str(&geojson).await
    }

    /// Reload from FeatureCollection text.
    ///
    /// Every feature is parsed and checked first; the store is only touched
    /// once the whole batch is known to be well-formed.
    pub async fn reload_from_str(&self, geojson: &str) -> Result<usize> {
        let monuments = parse_feature_collection(geojson)?;

        let inserted = self.repository.replace_all(&monuments).await?;

        tracing::info!("{} monuments reloaded", inserted);

        Ok(monuments.len())
    }
}

fn parse_feature_collection(geojson: &str) -> Result<Vec<NewMonument>> {
    let collection: SourceFeatureCollection = serde_json::from_str(geojson).map_err(|e| {
        AppError::InvalidGeoJson(format!(
            "expected a FeatureCollection with a features list: {}",
            e
        ))
    })?;

    collection
        .features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| {
            parse_feature(feature).map_err(|reason| {
                AppError::InvalidGeoJson(format!("feature #{}: {}", index, reason))
            })
        })
        .collect()
}

fn parse_feature(value: serde_json::Value) -> std::result::Result<NewMonument, String> {
    let feature: SourceFeature = serde_json::from_value(value).map_err(|e| e.to_string())?;

    feature
        .properties
        .validate()
        .map_err(|e| e.to_string())?;

    let location = GeoPoint::from_geometry(&feature.geometry).map_err(|e| e.to_string())?;

    Ok(NewMonument {
        name: feature.properties.name,
        image: feature.properties.image,
        location,
    })
}

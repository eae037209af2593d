use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::monuments::dtos::{MonumentFeatureCollection, MonumentNameDto};
use crate::features::monuments::services::MonumentRepository;
use crate::shared::geojson::FeatureCollection;

/// Read side of the monuments feature
pub struct MonumentService {
    repository: Arc<dyn MonumentRepository>,
    batch_size: i64,
}

impl MonumentService {
    pub fn new(repository: Arc<dyn MonumentRepository>, batch_size: i64) -> Self {
        Self {
            repository,
            batch_size: batch_size.max(1),
        }
    }

    /// All monument names in ascending order
    pub async fn list_names(&self) -> Result<Vec<MonumentNameDto>> {
        let names = self.repository.list_names().await?;
        Ok(names.into_iter().map(Into::into).collect())
    }

    /// Every monument as a GeoJSON feature, in store order.
    ///
    /// Rows are read `batch_size` at a time from one snapshot, so a reload
    /// committed meanwhile is not mixed in. A stored geometry that does not
    /// parse aborts the whole export.
    pub async fn feature_collection(&self) -> Result<MonumentFeatureCollection> {
        let mut export = self.repository.begin_export().await?;
        let mut features = Vec::new();
        let mut after_id = 0;

        loop {
            let rows = export
                .fetch_geojson_batch(after_id, self.batch_size)
                .await?;
            let fetched = rows.len() as i64;

            for row in rows {
                after_id = row.id;
                let feature = row.into_feature().map_err(|e| {
                    AppError::Internal(format!(
                        "Stored geometry of monument {} is not valid GeoJSON: {}",
                        after_id, e
                    ))
                })?;
                features.push(feature);
            }

            if fetched < self.batch_size {
                break;
            }
        }

        export.finish().await?;

        tracing::debug!(
            "Built monument feature collection with {} features",
            features.len()
        );

        Ok(FeatureCollection::new(features))
    }
}

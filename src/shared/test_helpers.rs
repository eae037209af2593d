use async_trait::async_trait;
use serde_json::json;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::error::{AppError, Result};
use crate::features::monuments::models::{MonumentGeoJsonRow, MonumentName, NewMonument};
use crate::features::monuments::services::{MonumentExport, MonumentRepository};
use crate::shared::geojson::GeoPoint;

#[derive(Debug, Clone)]
struct StoredMonument {
    id: i64,
    name: String,
    image: String,
    geom: String,
}

/// In-memory stand-in for the `monuments` table.
///
/// Behaves like the PostGIS store: points are stored in 2D, ids keep growing
/// across reloads, names come back in byte order, and an export sees the rows
/// as they were when it began.
#[derive(Debug, Default)]
pub struct InMemoryMonumentRepository {
    rows: Mutex<Vec<StoredMonument>>,
    last_id: AtomicI64,
    batch_requests: Arc<AtomicUsize>,
    unavailable: bool,
}

impl InMemoryMonumentRepository {
    /// A store whose every call fails as if the database were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of `fetch_geojson_batch` calls so far
    pub fn batch_requests(&self) -> usize {
        self.batch_requests.load(Ordering::SeqCst)
    }

    /// Overwrite the stored geometry text of row `id`
    pub fn corrupt_geometry(&self, id: i64, geom: &str) {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|row| row.id == id) {
            row.geom = geom.to_string();
        }
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl MonumentRepository for InMemoryMonumentRepository {
    async fn replace_all(&self, monuments: &[NewMonument]) -> Result<u64> {
        self.check_available()?;

        let mut rows = self.rows.lock().unwrap();
        *rows = monuments
            .iter()
            .map(|monument| StoredMonument {
                id: self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
                name: monument.name.clone(),
                image: monument.image.clone(),
                geom: serde_json::to_string(&monument.location.to_geometry()).unwrap(),
            })
            .collect();

        Ok(monuments.len() as u64)
    }

    async fn list_names(&self) -> Result<Vec<MonumentName>> {
        self.check_available()?;

        let mut names: Vec<MonumentName> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .map(|row| MonumentName {
                name: row.name.clone(),
            })
            .collect();
        names.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(names)
    }

    async fn begin_export(&self) -> Result<Box<dyn MonumentExport>> {
        self.check_available()?;

        Ok(Box::new(InMemoryMonumentExport {
            snapshot: self.rows.lock().unwrap().clone(),
            batch_requests: Arc::clone(&self.batch_requests),
        }))
    }
}

struct InMemoryMonumentExport {
    snapshot: Vec<StoredMonument>,
    batch_requests: Arc<AtomicUsize>,
}

#[async_trait]
impl MonumentExport for InMemoryMonumentExport {
    async fn fetch_geojson_batch(
        &mut self,
        after_id: i64,
        limit: i64,
    ) -> Result<Vec<MonumentGeoJsonRow>> {
        self.batch_requests.fetch_add(1, Ordering::SeqCst);

        Ok(self
            .snapshot
            .iter()
            .filter(|row| row.id > after_id)
            .take(limit as usize)
            .map(|row| MonumentGeoJsonRow {
                id: row.id,
                name: row.name.clone(),
                image: row.image.clone(),
                geom: row.geom.clone(),
            })
            .collect())
    }

    async fn finish(self: Box<Self>) -> Result<()> {
        Ok(())
    }
}

pub fn new_monument(name: &str, longitude: f64, latitude: f64) -> NewMonument {
    NewMonument {
        name: name.to_string(),
        image: format!("{}.jpg", name.to_lowercase().replace(' ', "-")),
        location: GeoPoint {
            longitude,
            latitude,
        },
    }
}

/// GeoJSON import file text for `(name, image, longitude, latitude)` entries
pub fn feature_collection_text(monuments: &[(&str, &str, f64, f64)]) -> String {
    let features: Vec<_> = monuments
        .iter()
        .map(|(name, image, longitude, latitude)| {
            json!({
                "type": "Feature",
                "properties": {"name": name, "image": image},
                "geometry": {"type": "Point", "coordinates": [longitude, latitude]}
            })
        })
        .collect();

    json!({"type": "FeatureCollection", "features": features}).to_string()
}

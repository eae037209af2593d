use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::core::error::{AppError, Result};
use crate::features::monuments::models::{MonumentGeoJsonRow, MonumentName, NewMonument};
use crate::shared::geojson::GeoPoint;

/// Names in byte order, independent of the cluster's default collation
const LIST_NAMES_SQL: &str = r#"
    SELECT name
    FROM monuments
    ORDER BY name COLLATE "C" ASC
"#;

/// Storage for the `monuments` table.
///
/// Geometry is read back as GeoJSON text; the store owns the native encoding.
#[async_trait]
pub trait MonumentRepository: Send + Sync {
    /// Delete every row and insert `monuments` in order. Either all rows are
    /// replaced or the previous contents are kept.
    async fn replace_all(&self, monuments: &[NewMonument]) -> Result<u64>;

    /// All names, ascending by byte order.
    async fn list_names(&self) -> Result<Vec<MonumentName>>;

    /// Open a read of the table that sees one snapshot for its whole lifetime,
    /// so a reload committed mid-export is not observed.
    async fn begin_export(&self) -> Result<Box<dyn MonumentExport>>;
}

/// Paged read over a single snapshot of the `monuments` table
#[async_trait]
pub trait MonumentExport: Send {
    /// Up to `limit` rows with `id > after_id`, ascending by id.
    async fn fetch_geojson_batch(
        &mut self,
        after_id: i64,
        limit: i64,
    ) -> Result<Vec<MonumentGeoJsonRow>>;

    /// Release the snapshot.
    async fn finish(self: Box<Self>) -> Result<()>;
}

/// PostgreSQL/PostGIS implementation
pub struct PgMonumentRepository {
    pool: PgPool,
}

impl PgMonumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MonumentRepository for PgMonumentRepository {
    async fn replace_all(&self, monuments: &[NewMonument]) -> Result<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to start monument reload transaction: {:?}", e);
            AppError::Database(e)
        })?;

        // Serializes reloads; plain readers (ACCESS SHARE) are not blocked.
        // DELETE rather than TRUNCATE keeps the old rows visible to snapshots
        // taken before this commits.
        sqlx::query("LOCK TABLE monuments IN EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to lock monuments for reload: {:?}", e);
                AppError::Database(e)
            })?;

        sqlx::query("DELETE FROM monuments")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to clear monuments: {:?}", e);
                AppError::Database(e)
            })?;

        let mut inserted = 0u64;
        for (index, monument) in monuments.iter().enumerate() {
            let result = sqlx::query(
                r#"
                INSERT INTO monuments (name, image, geom)
                VALUES ($1, $2, ST_SetSRID(ST_MakePoint($3, $4), $5))
                "#,
            )
            .bind(&monument.name)
            .bind(&monument.image)
            .bind(monument.location.longitude)
            .bind(monument.location.latitude)
            .bind(GeoPoint::SRID)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to insert monument #{} ({}): {:?}",
                    index,
                    monument.name,
                    e
                );
                AppError::Database(e)
            })?;
            inserted += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit monument reload: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(inserted)
    }

    async fn list_names(&self) -> Result<Vec<MonumentName>> {
        let names = sqlx::query_as::<_, MonumentName>(LIST_NAMES_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to fetch monument names: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(names)
    }

    async fn begin_export(&self) -> Result<Box<dyn MonumentExport>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to start monument export transaction: {:?}", e);
            AppError::Database(e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                tracing::error!("Failed to set monument export isolation: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(Box::new(PgMonumentExport { tx }))
    }
}

/// Export running inside a `REPEATABLE READ, READ ONLY` transaction
pub struct PgMonumentExport {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl MonumentExport for PgMonumentExport {
    async fn fetch_geojson_batch(
        &mut self,
        after_id: i64,
        limit: i64,
    ) -> Result<Vec<MonumentGeoJsonRow>> {
        let rows = sqlx::query_as::<_, MonumentGeoJsonRow>(
            r#"
            SELECT id, name, image, ST_AsGeoJSON(geom) AS geom
            FROM monuments
            WHERE id > $1
            ORDER BY id ASC
            LIMIT $2
            "#,
        )
        .bind(after_id)
        .bind(limit)
        .fetch_all(&mut *self.tx)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to fetch monument batch after id {}: {:?}",
                after_id,
                e
            );
            AppError::Database(e)
        })?;

        Ok(rows)
    }

    async fn finish(self: Box<Self>) -> Result<()> {
        self.tx.commit().await.map_err(|e| {
            tracing::error!("Failed to close monument export transaction: {:?}", e);
            AppError::Database(e)
        })
    }
}

/// Run against a live PostGIS database:
/// `DATABASE_URL=postgres://... cargo test -- --ignored`
#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::monuments::services::{MonumentLoader, MonumentService};
    use crate::shared::test_helpers::new_monument;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_names_are_ordered_by_byte_collation() {
        assert!(LIST_NAMES_SQL.contains(r#"ORDER BY name COLLATE "C" ASC"#));
    }

    async fn drain(export: &mut Box<dyn MonumentExport>, after_id: i64) -> Vec<String> {
        export
            .fetch_geojson_batch(after_id, 100)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row.name)
            .collect()
    }

    #[sqlx::test]
    #[ignore = "requires a PostGIS database at DATABASE_URL"]
    async fn test_pg_export_is_not_spliced_by_a_concurrent_reload(pool: PgPool) {
        let repository = PgMonumentRepository::new(pool);
        repository
            .replace_all(&[
                new_monument("Old A", 1.0, 1.0),
                new_monument("Old B", 2.0, 2.0),
                new_monument("Old C", 3.0, 3.0),
            ])
            .await
            .unwrap();

        let mut export = repository.begin_export().await.unwrap();
        let first = export.fetch_geojson_batch(0, 2).await.unwrap();
        let last_id = first.last().unwrap().id;

        repository
            .replace_all(&[new_monument("New Z", 9.0, 9.0)])
            .await
            .unwrap();

        let mut names: Vec<String> = first.into_iter().map(|row| row.name).collect();
        names.extend(drain(&mut export, last_id).await);
        export.finish().await.unwrap();

        assert_eq!(names, vec!["Old A", "Old B", "Old C"]);

        let mut fresh = repository.begin_export().await.unwrap();
        assert_eq!(drain(&mut fresh, 0).await, vec!["New Z"]);
        fresh.finish().await.unwrap();
    }

    #[sqlx::test]
    #[ignore = "requires a PostGIS database at DATABASE_URL"]
    async fn test_pg_names_sort_by_bytes(pool: PgPool) {
        let repository = PgMonumentRepository::new(pool);
        repository
            .replace_all(&[
                new_monument("colosseum", 12.4922, 41.8902),
                new_monument("Zeus Temple", 22.7253, 37.9384),
                new_monument("Éiffel", 2.2945, 48.8584),
                new_monument("acropolis", 23.7257, 37.9715),
                new_monument("Big Ben", -0.1246, 51.5007),
            ])
            .await
            .unwrap();

        let names: Vec<String> = repository
            .list_names()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.name)
            .collect();

        assert_eq!(
            names,
            vec!["Big Ben", "Zeus Temple", "acropolis", "colosseum", "Éiffel"]
        );
    }

    #[sqlx::test]
    #[ignore = "requires a PostGIS database at DATABASE_URL"]
    async fn test_pg_reload_round_trip_drops_altitude(pool: PgPool) {
        let repository = Arc::new(PgMonumentRepository::new(pool));
        let loader = MonumentLoader::new(Arc::clone(&repository) as Arc<dyn MonumentRepository>);
        let service = MonumentService::new(repository, 1);
        let input = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": {"name": "Obelisk", "image": "obelisk.jpg"},
                    "geometry": {"type": "Point", "coordinates": [2.2945, 48.8584]}
                },
                {
                    "type": "Feature",
                    "properties": {"name": "Colosseum", "image": "colosseum.jpg"},
                    "geometry": {"type": "Point", "coordinates": [12.4922, 41.8902, 30.0]}
                }
            ]
        })
        .to_string();

        assert_eq!(loader.reload_from_str(&input).await.unwrap(), 2);
        // Second reload replaces rather than appends
        assert_eq!(loader.reload_from_str(&input).await.unwrap(), 2);

        let collection = serde_json::to_value(service.feature_collection().await.unwrap()).unwrap();
        assert_eq!(collection["features"].as_array().unwrap().len(), 2);
        assert_eq!(collection["features"][0]["properties"]["name"], "Obelisk");
        assert_eq!(
            collection["features"][1]["geometry"],
            json!({"type": "Point", "coordinates": [12.4922, 41.8902]})
        );
    }
}

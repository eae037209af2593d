//! Replace the contents of the monuments table with the GeoJSON file.
//!
//! ## Usage
//!
//! ```bash
//! reload-monuments
//! ```
//!
//! The file is read from `MONUMENTS_GEOJSON_PATH`
//! (default `resources/geojson/monuments.geojson`). Prints the number of
//! monuments loaded and exits 0; any failure exits non-zero.

use monuments_map::core::config::{DatabaseConfig, MonumentsConfig};
use monuments_map::core::{database, telemetry};
use monuments_map::features::monuments::{MonumentLoader, PgMonumentRepository};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let database_config = DatabaseConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let monuments_config = MonumentsConfig::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let pool = database::create_pool(&database_config).await?;
    database::run_migrations(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;

    let loader = MonumentLoader::new(Arc::new(PgMonumentRepository::new(pool.clone())));
    let count = loader
        .reload_from_path(&monuments_config.geojson_path)
        .await?;

    println!("{} monuments reloaded", count);

    pool.close().await;

    Ok(())
}

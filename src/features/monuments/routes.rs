use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::monuments::handlers;
use crate::features::monuments::services::MonumentService;
use crate::shared::constants::{MONUMENT_GEOJSON_PATH, MONUMENT_NAMES_PATH};

/// Create routes for the monuments feature
pub fn routes(service: Arc<MonumentService>) -> Router {
    Router::new()
        .route(MONUMENT_NAMES_PATH, get(handlers::list_monument_names))
        .route(MONUMENT_GEOJSON_PATH, get(handlers::get_monuments_geojson))
        .with_state(service)
}

use std::sync::Arc;

use axum::{extract::State, http::header, response::IntoResponse, Json};

use crate::core::error::Result;
use crate::features::monuments::dtos::{MonumentNameDto, MonumentPropertiesDto};
use crate::features::monuments::services::MonumentService;
use crate::shared::constants::GEOJSON_CONTENT_TYPE;
use crate::shared::geojson::FeatureCollection;
use crate::shared::types::ErrorResponse;

/// List monument names, alphabetically
#[utoipa::path(
    get,
    path = "/api/monuments",
    responses(
        (status = 200, description = "Monument names ordered by name", body = Vec<MonumentNameDto>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    ),
    tag = "monuments"
)]
pub async fn list_monument_names(
    State(service): State<Arc<MonumentService>>,
) -> Result<Json<Vec<MonumentNameDto>>> {
    let names = service.list_names().await?;
    Ok(Json(names))
}

/// Every monument as a GeoJSON FeatureCollection
#[utoipa::path(
    get,
    path = "/api/monuments/geojson",
    responses(
        (status = 200, description = "FeatureCollection of all monuments", body = FeatureCollection<MonumentPropertiesDto>, content_type = "application/geo+json"),
        (status = 500, description = "Store unavailable or stored geometry unreadable", body = ErrorResponse)
    ),
    tag = "monuments"
)]
pub async fn get_monuments_geojson(
    State(service): State<Arc<MonumentService>>,
) -> Result<impl IntoResponse> {
    let collection = service.feature_collection().await?;
    Ok((
        [(header::CONTENT_TYPE, GEOJSON_CONTENT_TYPE)],
        Json(collection),
    ))
}

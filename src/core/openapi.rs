use utoipa::{Modify, OpenApi};

use crate::features::dashboard::handlers as dashboard_handlers;
use crate::features::monuments::{dtos as monuments_dtos, handlers as monuments_handlers};
use crate::shared::geojson::{FeatureCollection, FeatureCollectionType, FeatureType};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Monuments
        monuments_handlers::list_monument_names,
        monuments_handlers::get_monuments_geojson,
        // Dashboard
        dashboard_handlers::get_dashboard,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            FeatureType,
            FeatureCollectionType,
            // Monuments
            monuments_dtos::MonumentNameDto,
            monuments_dtos::MonumentPropertiesDto,
            FeatureCollection<monuments_dtos::MonumentPropertiesDto>,
        )
    ),
    tags(
        (name = "monuments", description = "Monument names and GeoJSON"),
        (name = "dashboard", description = "Map page"),
    ),
    info(
        title = "Monuments Map API",
        version = "0.1.0",
        description = "Monument names and GeoJSON for the map dashboard",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_monument_paths() {
        let doc = ApiDoc::openapi();

        assert!(doc.paths.paths.contains_key("/api/monuments"));
        assert!(doc.paths.paths.contains_key("/api/monuments/geojson"));
        assert!(doc.paths.paths.contains_key("/dashboard"));
    }

    #[test]
    fn test_swagger_info_modifier_overrides_info() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "Custom docs".to_string(),
        }
        .modify(&mut doc);

        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
        assert_eq!(doc.info.description.as_deref(), Some("Custom docs"));
    }
}

use minijinja::context;

use crate::core::error::Result;
use crate::shared::constants::{MONUMENT_GEOJSON_PATH, MONUMENT_NAMES_PATH};
use crate::shared::pages::render_page;

/// Renders the map page. The page carries no monument data; the browser
/// fetches it from the monuments endpoints.
pub struct DashboardService {
    title: String,
}

impl DashboardService {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn render(&self) -> Result<String> {
        let html = render_page(
            "dashboard.html",
            context! {
                title => &self.title,
                names_url => MONUMENT_NAMES_PATH,
                geojson_url => MONUMENT_GEOJSON_PATH,
            },
        )?;

        Ok(html)
    }
}

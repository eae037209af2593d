use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::Result;
use crate::features::dashboard::services::DashboardService;

/// Map dashboard page
#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Dashboard HTML page", content_type = "text/html")
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(State(service): State<Arc<DashboardService>>) -> Result<Html<String>> {
    Ok(Html(service.render()?))
}

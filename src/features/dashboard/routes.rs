use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create the dashboard page route
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/dashboard", get(handlers::get_dashboard))
        .with_state(dashboard_service)
}

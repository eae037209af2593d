use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

use crate::core::error::AppError;

/// Global template environment
static PAGE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Embedded page templates as (name, source). The `.html` suffix turns on auto-escaping.
const PAGES: &[(&str, &str)] = &[(
    "dashboard.html",
    include_str!("../../../templates/pages/dashboard.html"),
)];

#[derive(Debug, Error)]
pub enum PageError {
    #[error("Page template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render page: {0}")]
    RenderError(String),
}

impl From<PageError> for AppError {
    fn from(err: PageError) -> Self {
        AppError::Internal(err.to_string())
    }
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in PAGES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load page template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded page template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    PAGE_ENV.get_or_init(init_environment)
}

/// Render the page template `name` with `ctx`.
///
/// ```ignore
/// let html = render_page("dashboard.html", minijinja::context! { title => "Monuments" })?;
/// ```
pub fn render_page(name: &str, ctx: Value) -> Result<String, PageError> {
    let template = get_environment()
        .get_template(name)
        .map_err(|_| PageError::NotFound(name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| PageError::RenderError(e.to_string()))
}

//! Server-rendered HTML pages.
//!
//! Templates live in `templates/pages/` and are compiled into the binary.

mod engine;

pub use engine::{render_page, PageError};

//! Monuments shown on the map dashboard.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/monuments` | Monument names, alphabetical |
//! | GET | `/api/monuments/geojson` | All monuments as a GeoJSON FeatureCollection |
//!
//! The table is filled by the `reload-monuments` command through [`MonumentLoader`].

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{MonumentLoader, MonumentRepository, MonumentService, PgMonumentRepository};

//! Monuments on a map.
//!
//! A PostGIS-backed `monuments` table, the `reload-monuments` command that
//! refills it from a GeoJSON file, and an axum API plus dashboard page that
//! serve it back as a name list or a GeoJSON FeatureCollection.

pub mod app;
pub mod core;
pub mod features;
pub mod shared;

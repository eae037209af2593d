mod monument;

pub use monument::{MonumentGeoJsonRow, MonumentName, NewMonument};

pub mod constants;
pub mod geojson;
pub mod pages;
pub mod types;

#[cfg(test)]
pub mod test_helpers;

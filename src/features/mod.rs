pub mod dashboard;
pub mod monuments;

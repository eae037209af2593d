pub mod monument_handler;

pub use monument_handler::*;

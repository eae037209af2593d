mod monument_loader;
mod monument_repository;
mod monument_service;

pub use monument_loader::MonumentLoader;
pub use monument_repository::{
    MonumentExport, MonumentRepository, PgMonumentExport, PgMonumentRepository,
};
pub use monument_service::MonumentService;

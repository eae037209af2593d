mod import_dto;
mod monument_dto;

pub use import_dto::{SourceFeature, SourceFeatureCollection};
pub use monument_dto::{
    MonumentFeature, MonumentFeatureCollection, MonumentNameDto, MonumentPropertiesDto,
};

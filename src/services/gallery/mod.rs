pub mod resource_cache;
pub mod placeholder_generator;
pub mod gallery_service;

pub use resource_cache::ResourceCache;
pub use placeholder_generator::{encode_blur_data_url, PlaceholderGenerator, BLUR_WIDTH, JPEG_QUALITY};
pub use gallery_service::GalleryService;

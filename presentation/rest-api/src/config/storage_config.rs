use std::env;
use std::path::PathBuf;

/// Route under which stored product images are served.
pub const IMAGES_ROUTE: &str = "/images/products";

/// Where uploaded product images are kept
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub image_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - IMAGE_STORAGE_DIR: image directory (default: "./public/images/products")
    pub fn from_env() -> Self {
        let image_dir = env::var("IMAGE_STORAGE_DIR")
            .unwrap_or_else(|_| "./public/images/products".to_string());

        Self {
            image_dir: PathBuf::from(image_dir),
        }
    }
}

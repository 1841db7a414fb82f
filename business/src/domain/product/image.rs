use std::path::Path;

use sha2::{Digest, Sha256};

use super::errors::ProductError;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_SIZE: usize = 5_000_000;

const ALLOWED_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// An image file received with a create request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// An upload that passed validation, with the name it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub file_name: String,
    pub url: String,
}

/// Returns the extension of `file_name` including the leading dot, as written.
pub fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{ext}"))
}

impl ImageUpload {
    /// Checks the file type first, then the size.
    ///
    /// Returns the extension as uploaded.
    pub fn validate(&self) -> Result<String, ProductError> {
        let ext = extension_of(&self.file_name).ok_or(ProductError::InvalidImage)?;
        if !ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            return Err(ProductError::InvalidImage);
        }
        if self.data.len() > MAX_IMAGE_SIZE {
            return Err(ProductError::ImageTooLarge);
        }
        Ok(ext)
    }

    /// Names the file `<sha256>-<millis><ext>` and builds its public url.
    pub fn stored_as(&self, ext: &str, epoch_millis: i64, base_url: &str) -> StoredImage {
        let digest = Sha256::digest(&self.data);
        let file_name = format!("{digest:x}-{epoch_millis}{ext}");
        let url = format!("{}/{}", base_url.trim_end_matches('/'), file_name);
        StoredImage { file_name, url }
    }
}

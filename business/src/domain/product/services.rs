use async_trait::async_trait;

use crate::domain::errors::StorageError;

/// Service port for the file store that serves product images.
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Writes `data` under `file_name`, replacing any file of that name.
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<(), StorageError>;
}

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use business::domain::errors::StorageError;
use business::domain::product::services::ImageStorage;

/// Product images kept in a directory on the local filesystem.
pub struct LocalImageStorage {
    root: PathBuf,
}

impl LocalImageStorage {
    /// Creates the storage, making `root` if it does not exist yet.
    pub async fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(StorageError::write)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, file_name: &str) -> Result<PathBuf, StorageError> {
        // Names are generated server side; anything with a separator is a bug.
        let name = Path::new(file_name);
        if name.file_name().map(|n| n == name.as_os_str()) != Some(true) {
            return Err(StorageError::write(format!("invalid file name: {file_name}")));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    async fn store(&self, file_name: &str, data: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(file_name)?;

        let mut file = tokio::fs::File::create(&path)
            .await
            .map_err(StorageError::write)?;
        file.write_all(data).await.map_err(StorageError::write)?;
        file.flush().await.map_err(StorageError::write)?;

        tracing::debug!(path = %path.display(), bytes = data.len(), "Stored product image");
        Ok(())
    }
}

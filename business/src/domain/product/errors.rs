use crate::domain::errors::{RepositoryError, StorageError};

/// Product errors.
///
/// The display text of each variant is the message sent to clients.
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("No files were uploaded.")]
    NoFileUploaded,
    #[error("Invalid Images")]
    InvalidImage,
    #[error("Maksimal file gambar yaitu 5 MB")]
    ImageTooLarge,
    #[error("Nama product wajib diisi")]
    NameEmpty,
    #[error("Slug product wajib diisi")]
    SlugEmpty,
    #[error("Stock harus berupa bilangan bulat positif")]
    InvalidStock,
    #[error("Harga harus berupa angka positif")]
    InvalidPrice,
    #[error("Kategori product tidak valid")]
    InvalidCategory,
    #[error("Data tidak ditemukan")]
    NotFound,
    #[error("product.not_implemented")]
    NotImplemented,
    #[error("{0}")]
    Repository(#[from] RepositoryError),
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl ProductError {
    /// Maps a repository error, turning a missing row into `NotFound`.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ProductError::NotFound,
            other => ProductError::Repository(other),
        }
    }
}

/// Repository errors for domain layer.
///
/// `DatabaseError` keeps the driver's message so callers can surface it as is.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("{0}")]
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error(err: impl std::fmt::Display) -> Self {
        RepositoryError::DatabaseError(err.to_string())
    }
}

/// Errors raised by the file store holding uploaded images.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{0}")]
    Write(String),
}

impl StorageError {
    pub fn write(err: impl std::fmt::Display) -> Self {
        StorageError::Write(err.to_string())
    }
}

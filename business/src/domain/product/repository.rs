use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductListing};
use super::search::SearchQuery;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ProductListing>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<ProductListing, RepositoryError>;
    async fn search(&self, query: &SearchQuery) -> Result<Vec<ProductListing>, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}

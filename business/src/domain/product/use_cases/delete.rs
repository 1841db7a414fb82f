use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

/// Delete has no agreed semantics yet (soft or hard, image removal).
pub struct DeleteProductParams {
    pub id: String,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}

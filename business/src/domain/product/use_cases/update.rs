use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

/// Update has no agreed semantics yet (full replace or patch, image
/// replacement), so the request carries only the raw path id.
pub struct UpdateProductParams {
    pub id: String,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

/// Placeholder until the product owner settles what delete should do.
///
/// Touches neither the store nor the image files.
pub struct DeleteProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger.warn(&format!(
            "Product delete requested for '{}' but is not implemented",
            params.id
        ));
        Err(ProductError::NotImplemented)
    }
}

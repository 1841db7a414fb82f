use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Placeholder until the product owner settles what update should do.
///
/// Touches neither the store nor the image files.
pub struct UpdateProductUseCaseImpl {
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger.warn(&format!(
            "Product update requested for '{}' but is not implemented",
            params.id
        ));
        Err(ProductError::NotImplemented)
    }
}

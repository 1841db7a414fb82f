use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductListing;
use crate::domain::product::search::SearchOutcome;

pub struct SearchProductsParams {
    pub query: Option<String>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchProductsParams,
    ) -> Result<SearchOutcome<ProductListing>, ProductError>;
}

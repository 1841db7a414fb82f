use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductListing;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::search::{SearchOutcome, SearchQuery};
use crate::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};

pub struct SearchProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchProductsParams,
    ) -> Result<SearchOutcome<ProductListing>, ProductError> {
        let Some(query) = SearchQuery::parse(params.query) else {
            self.logger.debug("Search requested without query text");
            return Ok(SearchOutcome::NoQuery);
        };

        self.logger
            .info(&format!("Searching products for '{}'", query.text()));
        let products = self.repository.search(&query).await?;

        if products.is_empty() {
            return Ok(SearchOutcome::NoMatches);
        }

        self.logger
            .info(&format!("Search matched {} products", products.len()));
        Ok(SearchOutcome::Matches(products))
    }
}

use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::image::ImageUpload;
use crate::domain::product::model::Product;

/// Raw fields of a create request, as received from the form.
pub struct CreateProductParams {
    pub image: Option<ImageUpload>,
    /// Public url the stored image will be served under, without the file name.
    pub image_base_url: String,
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub stock: Option<String>,
    pub price: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}

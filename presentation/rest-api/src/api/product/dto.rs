use chrono::{DateTime, Utc};
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object, Union};

use business::domain::category::model::CategorySummary;
use business::domain::product::model::ProductListing;

use crate::api::error::MessageResponse;

/// Multipart form of a create request.
///
/// Every text field is optional here so that validation, and its messages,
/// stay in the business layer.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product image (.png, .jpg or .jpeg, at most 5 MB)
    pub file: Option<Upload>,
    #[oai(rename = "nameProduct")]
    pub name_product: Option<String>,
    pub slug: Option<String>,
    pub desc: Option<String>,
    #[oai(rename = "productCategoryUuid")]
    pub product_category_uuid: Option<String>,
    pub stock: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CategoryResponse {
    /// Category name
    pub product_category_name: String,
    /// Category description
    pub description: Option<String>,
}

impl From<CategorySummary> for CategoryResponse {
    fn from(category: CategorySummary) -> Self {
        Self {
            product_category_name: category.name,
            description: category.description,
        }
    }
}

/// Category as shown in search results.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CategoryNameResponse {
    pub product_category_name: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductResponse {
    /// Product unique identifier
    pub uuid: String,
    pub name_product: String,
    pub slug: String,
    /// Stored image file name
    pub image: Option<String>,
    /// Public url of the image
    pub image_url: Option<String>,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_category_uuid: Option<String>,
    pub stock: i32,
    /// Decimal price, exact as stored
    pub price: String,
    /// Category the product is filed under, null when it has none
    pub product_category: Option<CategoryResponse>,
}

impl From<ProductListing> for ProductResponse {
    fn from(listing: ProductListing) -> Self {
        let product = listing.product;
        Self {
            uuid: product.id.to_string(),
            name_product: product.name,
            slug: product.slug,
            image: product.image,
            image_url: product.image_url,
            desc: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
            product_category_uuid: product.category_id.map(|id| id.to_string()),
            stock: product.stock.value(),
            price: product.price.to_string(),
            product_category: listing.category.map(|c| c.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct SearchProductResponse {
    pub uuid: String,
    pub name_product: String,
    pub slug: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub desc: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_category_uuid: Option<String>,
    pub stock: i32,
    pub price: String,
    pub product_category: Option<CategoryNameResponse>,
}

impl From<ProductListing> for SearchProductResponse {
    fn from(listing: ProductListing) -> Self {
        let product = listing.product;
        Self {
            uuid: product.id.to_string(),
            name_product: product.name,
            slug: product.slug,
            image: product.image,
            image_url: product.image_url,
            desc: product.description,
            created_at: product.created_at,
            updated_at: product.updated_at,
            product_category_uuid: product.category_id.map(|id| id.to_string()),
            stock: product.stock.value(),
            price: product.price.to_string(),
            product_category: listing.category.map(|c| CategoryNameResponse {
                product_category_name: c.name,
            }),
        }
    }
}

/// Body of a search that was given query text: the matches, or a message
/// when there are none.
#[derive(Debug, Clone, Union)]
pub enum SearchResult {
    Products(Vec<SearchProductResponse>),
    Message(MessageResponse),
}

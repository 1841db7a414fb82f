use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::image::StoredImage;
use super::value_objects::{Price, Stock};
use crate::domain::category::model::CategorySummary;

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub stock: Stock,
    pub price: Price,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub slug: String,
    pub image: StoredImage,
    pub description: Option<String>,
    pub category_id: Option<Uuid>,
    pub stock: Stock,
    pub price: Price,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        Self::check_name_and_slug(&props.name, &props.slug)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            slug: props.slug,
            image: Some(props.image.file_name),
            image_url: Some(props.image.url),
            description: props.description,
            category_id: props.category_id,
            stock: props.stock,
            price: props.price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Name and slug must both carry text, name first.
    pub fn check_name_and_slug(name: &str, slug: &str) -> Result<(), ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if slug.trim().is_empty() {
            return Err(ProductError::SlugEmpty);
        }

        Ok(())
    }
}

/// A product together with the category it is filed under, if any.
#[derive(Debug, Clone)]
pub struct ProductListing {
    pub product: Product,
    pub category: Option<CategorySummary>,
}

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::category::model::CategorySummary;
use business::domain::product::model::{Product, ProductListing};
use business::domain::product::value_objects::{Price, Stock};

/// A product row with its category columns joined in.
#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub uuid: Uuid,
    pub name_product: String,
    pub slug: String,
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub product_category_uuid: Option<Uuid>,
    pub stock: i32,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub product_category_name: Option<String>,
    pub product_category_description: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> ProductListing {
        let category = self
            .product_category_name
            .map(|name| CategorySummary {
                name,
                description: self.product_category_description,
            });

        ProductListing {
            product: Product {
                id: self.uuid,
                name: self.name_product,
                slug: self.slug,
                image: self.image,
                image_url: self.image_url,
                description: self.description,
                category_id: self.product_category_uuid,
                stock: Stock::from_repository(self.stock),
                price: Price::from_repository(self.price),
                created_at: self.created_at,
                updated_at: self.updated_at,
            },
            category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(category: Option<(&str, Option<&str>)>) -> ProductEntity {
        let now = Utc::now();
        ProductEntity {
            uuid: Uuid::new_v4(),
            name_product: "Chair".to_string(),
            slug: "chair".to_string(),
            image: Some("abc-1.jpg".to_string()),
            image_url: Some("http://localhost:8080/images/products/abc-1.jpg".to_string()),
            description: None,
            product_category_uuid: category.map(|_| Uuid::new_v4()),
            stock: 8,
            price: BigDecimal::from(125_000),
            created_at: now,
            updated_at: now,
            product_category_name: category.map(|(name, _)| name.to_string()),
            product_category_description: category.and_then(|(_, d)| d.map(str::to_string)),
        }
    }

    #[test]
    fn should_attach_category_when_joined_row_exists() {
        let listing = entity(Some(("Furniture", Some("Perabot")))).into_domain();

        let category = listing.category.unwrap();
        assert_eq!(category.name, "Furniture");
        assert_eq!(category.description.as_deref(), Some("Perabot"));
        assert_eq!(listing.product.stock.value(), 8);
        assert_eq!(listing.product.price.to_string(), "125000");
    }

    #[test]
    fn should_leave_category_empty_without_joined_row() {
        let listing = entity(None).into_domain();

        assert!(listing.category.is_none());
        assert!(listing.product.category_id.is_none());
    }
}

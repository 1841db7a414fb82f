use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductListing};
use business::domain::product::repository::ProductRepository;
use business::domain::product::search::SearchQuery;

use super::entity::ProductEntity;
use crate::schema::CatalogSchema;

/// Statements derived once from the catalog schema.
///
/// User input only ever reaches them as bound parameters.
#[derive(Debug, Clone)]
pub struct ProductQueries {
    pub select_all: String,
    pub select_by_id: String,
    pub search: String,
    pub insert: String,
    pub delete: String,
}

impl ProductQueries {
    pub fn new(schema: &CatalogSchema) -> Self {
        let p = schema.products.alias;
        let c = schema.categories.alias;
        let pk = schema.products.primary_key;

        let select = format!(
            "SELECT {p}.{pk} AS uuid, {p}.name_product, {p}.slug, {p}.image, {p}.image_url, \
             {p}.description, {p}.product_category_uuid, {p}.stock, {p}.price, \
             {p}.created_at, {p}.updated_at, \
             {c}.product_category_name, {c}.description AS product_category_description \
             FROM {products} {p} {join}",
            products = schema.products.name,
            join = schema.product_category.join_clause(),
        );

        Self {
            select_all: format!("{select} ORDER BY {p}.created_at DESC"),
            select_by_id: format!("{select} WHERE {p}.{pk} = $1"),
            search: format!(
                "{select} WHERE LOWER({p}.name_product) LIKE $1 \
                 OR LOWER({p}.description) LIKE $1 \
                 OR {p}.name_product ~ $2 \
                 ORDER BY {p}.created_at DESC"
            ),
            insert: format!(
                "INSERT INTO {products} ({pk}, name_product, slug, image, image_url, description, \
                 product_category_uuid, stock, price, created_at, updated_at) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
                products = schema.products.name,
            ),
            delete: format!(
                "DELETE FROM {products} WHERE {pk} = $1",
                products = schema.products.name,
            ),
        }
    }
}

pub struct ProductRepositoryPostgres {
    pool: PgPool,
    queries: ProductQueries,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool, schema: &CatalogSchema) -> Self {
        Self {
            pool,
            queries: ProductQueries::new(schema),
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ProductListing>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&self.queries.select_all)
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<ProductListing, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&self.queries.select_by_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<ProductListing>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&self.queries.search)
            .bind(query.contains_pattern())
            .bind(query.name_pattern())
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(&self.queries.insert)
            .bind(product.id)
            .bind(&product.name)
            .bind(&product.slug)
            .bind(&product.image)
            .bind(&product.image_url)
            .bind(&product.description)
            .bind(product.category_id)
            .bind(product.stock.value())
            .bind(product.price.as_decimal())
            .bind(product.created_at)
            .bind(product.updated_at)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(&self.queries.delete)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::database_error)?;

        Ok(())
    }
}

use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::product::errors::ProductError;
use business::domain::product::image::ImageUpload;
use business::domain::product::search::{NO_MATCH_MESSAGE, SearchOutcome};
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, MessageResponse};
use crate::api::product::dto::{
    CreateProductForm, ProductResponse, SearchProductResponse, SearchResult,
};
use crate::api::tags::ApiTags;
use crate::config::storage_config::IMAGES_ROUTE;

const PRODUCT_CREATED_MESSAGE: &str = "Product berhasil dibuat";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    search_use_case: Arc<dyn SearchProductsUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        search_use_case: Arc<dyn SearchProductsUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Public url prefix for stored images, built from the incoming request.
fn image_base_url(req: &Request) -> String {
    let scheme = req
        .header("x-forwarded-proto")
        .or_else(|| req.uri().scheme_str())
        .unwrap_or("http");
    let host = req
        .header("host")
        .or_else(|| req.uri().authority().map(|a| a.as_str()))
        .unwrap_or("localhost");
    format!("{scheme}://{host}{IMAGES_ROUTE}")
}

/// Product catalog API
///
/// Endpoints for listing, searching, reading and creating products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    ///
    /// Accepts a multipart form with the product fields and its image in
    /// `file`. The image is stored and served under `/images/products`.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, req: &Request, form: CreateProductForm) -> CreateProductResponse {
        let image = match form.file {
            Some(upload) => {
                let file_name = upload.file_name().unwrap_or_default().to_string();
                match upload.into_vec().await {
                    // Browsers send an empty, unnamed part when no file is picked.
                    Ok(data) if file_name.is_empty() && data.is_empty() => None,
                    Ok(data) => Some(ImageUpload { file_name, data }),
                    Err(err) => {
                        return CreateProductResponse::InternalError(Json(ErrorResponse::new(
                            err.to_string(),
                        )));
                    }
                }
            }
            None => None,
        };

        let params = CreateProductParams {
            image,
            image_base_url: image_base_url(req),
            name: form.name_product,
            slug: form.slug,
            description: form.desc,
            category_id: form.product_category_uuid,
            stock: form.stock,
            price: form.price,
        };

        match self.create_use_case.execute(params).await {
            Ok(_) => CreateProductResponse::Created(Json(MessageResponse::new(
                PRODUCT_CREATED_MESSAGE,
            ))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    422 => CreateProductResponse::UnprocessableEntity(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List all products
    ///
    /// Returns every product with its category name and description.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self) -> GetAllProductsResponse {
        match self.get_all_use_case.execute().await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Search products
    ///
    /// Matches `q` against product names and descriptions. Answers `null`
    /// when `q` is empty, and a message instead of an empty list when
    /// nothing matches.
    #[oai(path = "/products/search", method = "get", tag = "ApiTags::Products")]
    async fn search_products(&self, q: Query<Option<String>>) -> SearchProductsResponse {
        match self
            .search_use_case
            .execute(SearchProductsParams { query: q.0 })
            .await
        {
            Ok(SearchOutcome::NoQuery) => SearchProductsResponse::Ok(Json(None)),
            Ok(SearchOutcome::NoMatches) => SearchProductsResponse::Ok(Json(Some(
                SearchResult::Message(MessageResponse::new(NO_MATCH_MESSAGE)),
            ))),
            Ok(SearchOutcome::Matches(products)) => {
                let responses: Vec<SearchProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                SearchProductsResponse::Ok(Json(Some(SearchResult::Products(responses))))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product with its category name and description.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        // A malformed id cannot match any product.
        let Ok(uuid) = Uuid::parse_str(&id.0) else {
            let (_status, json) = ProductError::NotFound.into_error_response();
            return GetProductByIdResponse::NotFound(json);
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: uuid })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Not available yet; the product is left unchanged.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(&self, id: Path<String>) -> UpdateProductResponse {
        match self
            .update_use_case
            .execute(UpdateProductParams { id: id.0 })
            .await
        {
            Ok(()) => UpdateProductResponse::NoContent,
            Err(ProductError::NotImplemented) => UpdateProductResponse::NotImplemented,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateProductResponse::InternalError(json)
            }
        }
    }

    /// Delete a product
    ///
    /// Not available yet; the product is left in place.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(ProductError::NotImplemented) => DeleteProductResponse::NotImplemented,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                DeleteProductResponse::InternalError(json)
            }
        }
    }
}

/// A create request whose body is not a readable multipart form carries no file.
fn create_bad_request(err: poem::Error) -> CreateProductResponse {
    tracing::debug!("Rejected create product payload: {}", err);
    CreateProductResponse::BadRequest(Json(ErrorResponse::new(
        ProductError::NoFileUploaded.to_string(),
    )))
}

#[derive(poem_openapi::ApiResponse)]
#[oai(bad_request_handler = "create_bad_request")]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 422)]
    UnprocessableEntity(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchProductsResponse {
    /// `null` without query text, otherwise matches or a not-found message
    #[oai(status = 200)]
    Ok(Json<Option<SearchResult>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 501)]
    NotImplemented,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 501)]
    NotImplemented,
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

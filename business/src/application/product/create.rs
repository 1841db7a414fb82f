use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::services::ImageStorage;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use crate::domain::product::value_objects::{Price, Stock, parse_category_id};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub storage: Arc<dyn ImageStorage>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let image = params.image.ok_or(ProductError::NoFileUploaded)?;
        let ext = image.validate()?;

        let name = params.name.unwrap_or_default();
        let slug = params.slug.unwrap_or_default();
        Product::check_name_and_slug(&name, &slug)?;

        let stock = Stock::parse(params.stock.as_deref())?;
        let price = Price::parse(params.price.as_deref())?;
        let category_id = parse_category_id(params.category_id.as_deref())?;

        let stored = image.stored_as(&ext, Utc::now().timestamp_millis(), &params.image_base_url);
        let file_name = stored.file_name.clone();

        let product = Product::new(NewProductProps {
            name,
            slug,
            image: stored,
            description: params.description,
            category_id,
            stock,
            price,
        })?;

        self.logger.info(&format!(
            "Creating product '{}' with image {} ({} bytes)",
            product.name,
            file_name,
            image.data.len()
        ));

        self.repository.save(&product).await?;

        // The row must not outlive a failed write.
        if let Err(err) = self.storage.store(&file_name, &image.data).await {
            self.logger.error(&format!(
                "Storing image {} failed, removing product {}: {}",
                file_name, product.id, err
            ));
            if let Err(rollback) = self.repository.delete(product.id).await {
                self.logger.error(&format!(
                    "Could not remove product {} after failed image write: {}",
                    product.id, rollback
                ));
            }
            return Err(err.into());
        }

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{RepositoryError, StorageError};
    use crate::domain::product::image::{ImageUpload, MAX_IMAGE_SIZE};
    use crate::domain::product::model::ProductListing;
    use crate::domain::product::search::SearchQuery;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_all(&self) -> Result<Vec<ProductListing>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<ProductListing, RepositoryError>;
            async fn search(&self, query: &SearchQuery) -> Result<Vec<ProductListing>, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Storage {}

        #[async_trait]
        impl ImageStorage for Storage {
            async fn store(&self, file_name: &str, data: &[u8]) -> Result<(), StorageError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn params(file_name: &str, size: usize) -> CreateProductParams {
        CreateProductParams {
            image: Some(ImageUpload {
                file_name: file_name.to_string(),
                data: vec![7u8; size],
            }),
            image_base_url: "http://localhost:8080/images/products".to_string(),
            name: Some("Chair".to_string()),
            slug: Some("chair".to_string()),
            description: Some("Kursi kayu jati".to_string()),
            category_id: None,
            stock: Some("12".to_string()),
            price: Some("250000".to_string()),
        }
    }

    fn use_case(repo: MockProductRepo, storage: MockStorage) -> CreateProductUseCaseImpl {
        CreateProductUseCaseImpl {
            repository: Arc::new(repo),
            storage: Arc::new(storage),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_save_product_and_store_image_when_upload_is_valid() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_store()
            .times(1)
            .withf(|name, data| name.ends_with(".jpg") && data.len() == 4_000_000)
            .returning(|_, _| Ok(()));

        let result = use_case(mock_repo, mock_storage)
            .execute(params("chair.jpg", 4_000_000))
            .await;

        let product = result.unwrap();
        assert_eq!(product.name, "Chair");
        assert_eq!(product.stock.value(), 12);
        let image = product.image.unwrap();
        assert!(image.ends_with(".jpg"));
        assert_eq!(
            product.image_url.as_deref(),
            Some(format!("http://localhost:8080/images/products/{image}").as_str())
        );
    }

    #[tokio::test]
    async fn should_reject_request_without_file() {
        let mut request = params("chair.png", 10);
        request.image = None;

        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(request)
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NoFileUploaded));
    }

    #[tokio::test]
    async fn should_reject_gif_without_touching_the_store() {
        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(params("chair.gif", 10))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidImage));
    }

    #[tokio::test]
    async fn should_reject_oversized_image_without_touching_the_store() {
        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(params("chair.png", MAX_IMAGE_SIZE + 1))
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::ImageTooLarge));
    }

    #[tokio::test]
    async fn should_check_file_before_other_fields() {
        let mut request = params("chair.gif", 10);
        request.name = None;
        request.stock = Some("banyak".to_string());

        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(request)
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidImage));
    }

    #[tokio::test]
    async fn should_reject_missing_name() {
        let mut request = params("chair.png", 10);
        request.name = None;

        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(request)
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_invalid_stock() {
        let mut request = params("chair.png", 10);
        request.stock = Some("-1".to_string());

        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(request)
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::InvalidStock));
    }

    #[tokio::test]
    async fn should_check_name_and_slug_before_stock_and_price() {
        let mut request = params("chair.png", 10);
        request.slug = Some(" ".to_string());
        request.stock = Some("-1".to_string());
        request.price = Some("abc".to_string());

        let result = use_case(MockProductRepo::new(), MockStorage::new())
            .execute(request)
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::SlugEmpty));
    }

    #[tokio::test]
    async fn should_surface_database_message_when_save_fails() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().returning(|_| {
            Err(RepositoryError::database_error(
                "insert or update on table \"products\" violates foreign key constraint",
            ))
        });

        let result = use_case(mock_repo, MockStorage::new())
            .execute(params("chair.png", 10))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::Repository(_)));
        assert!(err.to_string().contains("foreign key"));
    }

    #[tokio::test]
    async fn should_remove_saved_product_when_image_write_fails() {
        let saved_id = Arc::new(std::sync::Mutex::new(None));
        let saved_id_clone = saved_id.clone();

        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_save().times(1).returning(move |product| {
            *saved_id_clone.lock().unwrap() = Some(product.id);
            Ok(())
        });
        let saved_id_check = saved_id.clone();
        mock_repo
            .expect_delete()
            .times(1)
            .withf(move |id| Some(*id) == *saved_id_check.lock().unwrap())
            .returning(|_| Ok(()));

        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_store()
            .returning(|_, _| Err(StorageError::write("No space left on device")));

        let result = use_case(mock_repo, mock_storage)
            .execute(params("chair.png", 10))
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, ProductError::Storage(_)));
        assert_eq!(err.to_string(), "No space left on device");
    }

    #[tokio::test]
    async fn should_link_product_to_given_category() {
        let category_id = Uuid::new_v4();
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_save()
            .withf(move |p| p.category_id == Some(category_id))
            .returning(|_| Ok(()));
        let mut mock_storage = MockStorage::new();
        mock_storage
            .expect_store()
            .withf(|_, data| data.to_vec() == vec![7u8; 10])
            .returning(|_, _| Ok(()));

        let mut request = params("chair.jpeg", 10);
        request.category_id = Some(category_id.to_string());

        let result = use_case(mock_repo, mock_storage).execute(request).await;

        assert_eq!(result.unwrap().category_id, Some(category_id));
    }
}

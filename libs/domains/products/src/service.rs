//! Product service containing business logic

use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, FindProduct, Product, UpdateProduct, PAGE_SIZE};
use crate::repository::ProductRepository;

/// Service layer for product operations.
///
/// Validates input and maps missing records to errors; persistence is
/// delegated to the repository.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new product after validating the input
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// List one page of products, PAGE_SIZE per page.
    ///
    /// Pages are 1-based; page 0 is treated as page 1.
    #[instrument(skip(self))]
    pub async fn get_all(&self, page: u64) -> ProductResult<Vec<Product>> {
        let offset = page.saturating_sub(1) * PAGE_SIZE as u64;
        self.repository
            .find_many(FindProduct::default(), offset, PAGE_SIZE)
            .await
    }

    /// Find all products matching a filter, without pagination
    #[instrument(skip(self))]
    pub async fn find(&self, filter: FindProduct) -> ProductResult<Vec<Product>> {
        self.repository.find_many(filter, 0, 0).await
    }

    /// Check whether any product matches the filter
    #[instrument(skip(self))]
    pub async fn exists(&self, filter: FindProduct) -> ProductResult<bool> {
        self.repository.exists(filter).await
    }

    /// Count products matching the filter
    #[instrument(skip(self))]
    pub async fn get_count(&self, filter: FindProduct) -> ProductResult<u64> {
        self.repository.count(filter).await
    }

    /// Partially update a product
    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: Uuid, patch: UpdateProduct) -> ProductResult<Product> {
        patch
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update_one(id, patch)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Mark a product as deleted, hiding it from all reads
    #[instrument(skip(self))]
    pub async fn soft_delete(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .soft_delete(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Permanently remove a product, soft-deleted or not
    #[instrument(skip(self))]
    pub async fn hard_delete(&self, id: Uuid) -> ProductResult<Product> {
        self.repository
            .hard_delete(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

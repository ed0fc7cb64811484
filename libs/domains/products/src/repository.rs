use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, FindProduct, Product, UpdateProduct};

/// Repository trait for Product persistence.
///
/// Every read and mutation except `hard_delete` operates on live records
/// only: soft-deleted products are invisible. A `limit` of 0 means no
/// limit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Create a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// List live products matching a filter, ordered by creation time
    async fn find_many(
        &self,
        filter: FindProduct,
        offset: u64,
        limit: i64,
    ) -> ProductResult<Vec<Product>>;

    /// Check whether any live product matches the filter
    async fn exists(&self, filter: FindProduct) -> ProductResult<bool>;

    /// Count live products matching the filter
    async fn count(&self, filter: FindProduct) -> ProductResult<u64>;

    /// Partially update a live product; None when no live record matches
    async fn update_one(&self, id: Uuid, patch: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Mark a live product as deleted; None when no live record matches
    async fn soft_delete(&self, id: Uuid) -> ProductResult<Option<Product>>;

    /// Physically remove a product regardless of its soft-delete state;
    /// None when the record does not exist at all
    async fn hard_delete(&self, id: Uuid) -> ProductResult<Option<Product>>;
}

//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::{IndexOptions, ReturnDocument},
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, FindProduct, Product, ProductRecord, UpdateProduct};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
pub struct MongoProductRepository {
    collection: Collection<ProductRecord>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<ProductRecord>("products");
        Self { collection }
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<ProductRecord>(collection_name);
        Self { collection }
    }

    /// Initialize indexes for optimal query performance
    pub async fn init_indexes(&self) -> ProductResult<()> {
        let indexes = vec![
            // Name lookups for exists/find
            IndexModel::builder()
                .keys(doc! { "name": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_name".to_string())
                        .build(),
                )
                .build(),
            // Category + publication state for catalog listings
            IndexModel::builder()
                .keys(doc! { "category": 1, "is_published": 1, "created_at": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_category_published".to_string())
                        .build(),
                )
                .build(),
            // Soft-delete exclusion applied to every default query
            IndexModel::builder()
                .keys(doc! { "deleted": 1 })
                .options(
                    IndexOptions::builder()
                        .name("idx_deleted".to_string())
                        .build(),
                )
                .build(),
        ];

        self.collection.create_indexes(indexes).await?;
        tracing::info!("Product indexes created successfully");
        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<ProductRecord> {
        &self.collection
    }

    /// Build a MongoDB filter document from FindProduct.
    ///
    /// Every query built here excludes soft-deleted records explicitly;
    /// hard deletes bypass this builder.
    fn build_filter(filter: &FindProduct) -> mongodb::bson::Document {
        let mut doc = doc! { "deleted": { "$ne": true } };

        if let Some(id) = filter.id {
            doc.insert("_id", to_bson(&id).unwrap_or(Bson::Null));
        }

        if let Some(ref name) = filter.name {
            doc.insert("name", name);
        }

        if let Some(ref category) = filter.category {
            doc.insert("category", category);
        }

        if let Some(is_published) = filter.is_published {
            doc.insert("is_published", is_published);
        }

        doc
    }

    /// Filter matching one live record by id
    fn live_id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! {
            "_id": to_bson(&id).unwrap_or(Bson::Null),
            "deleted": { "$ne": true }
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let record = ProductRecord::new(input);

        self.collection.insert_one(&record).await?;

        tracing::info!(product_id = %record.id, "Product created successfully");
        Ok(Product::from(record))
    }

    #[instrument(skip(self))]
    async fn find_many(
        &self,
        filter: FindProduct,
        offset: u64,
        limit: i64,
    ) -> ProductResult<Vec<Product>> {
        use futures_util::TryStreamExt;

        let mongo_filter = Self::build_filter(&filter);

        // limit 0 means no limit, matching the driver's semantics
        let options = mongodb::options::FindOptions::builder()
            .limit(limit)
            .skip(offset)
            .sort(doc! { "created_at": 1 })
            .build();

        let cursor = self
            .collection
            .find(mongo_filter)
            .with_options(options)
            .await?;
        let records: Vec<ProductRecord> = cursor.try_collect().await?;

        Ok(records.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn exists(&self, filter: FindProduct) -> ProductResult<bool> {
        let mongo_filter = Self::build_filter(&filter);
        let record = self.collection.find_one(mongo_filter).await?;
        Ok(record.is_some())
    }

    #[instrument(skip(self))]
    async fn count(&self, filter: FindProduct) -> ProductResult<u64> {
        let mongo_filter = Self::build_filter(&filter);
        let count = self.collection.count_documents(mongo_filter).await?;
        Ok(count)
    }

    #[instrument(skip(self, patch))]
    async fn update_one(&self, id: Uuid, patch: UpdateProduct) -> ProductResult<Option<Product>> {
        let filter = Self::live_id_filter(id);

        let Some(mut record) = self.collection.find_one(filter.clone()).await? else {
            return Ok(None);
        };

        record.apply_update(patch);
        self.collection.replace_one(filter, &record).await?;

        tracing::info!(product_id = %id, "Product updated successfully");
        Ok(Some(Product::from(record)))
    }

    #[instrument(skip(self))]
    async fn soft_delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let update = doc! {
            "$set": {
                "deleted": true,
                "updated_at": chrono::Utc::now().to_rfc3339(),
            }
        };

        let record = self
            .collection
            .find_one_and_update(Self::live_id_filter(id), update)
            .return_document(ReturnDocument::After)
            .await?;

        if record.is_some() {
            tracing::info!(product_id = %id, "Product soft-deleted");
        }
        Ok(record.map(Product::from))
    }

    #[instrument(skip(self))]
    async fn hard_delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        // No deleted exclusion: hard delete removes soft-deleted records too
        let filter = doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) };
        let record = self.collection.find_one_and_delete(filter).await?;

        if record.is_some() {
            tracing::info!(product_id = %id, "Product permanently deleted");
        }
        Ok(record.map(Product::from))
    }
}

//! In-memory implementation of ProductRepository
//!
//! Used by tests and for dependency-free local development. Mirrors the
//! MongoDB implementation's semantics, including soft-delete exclusion.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, FindProduct, Product, ProductRecord, UpdateProduct};
use crate::repository::ProductRepository;

/// In-memory product repository backed by a HashMap
#[derive(Default)]
pub struct InMemoryProductRepository {
    store: RwLock<HashMap<Uuid, ProductRecord>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(record: &ProductRecord, filter: &FindProduct) -> bool {
        if record.deleted {
            return false;
        }
        if let Some(id) = filter.id {
            if record.id != id {
                return false;
            }
        }
        if let Some(ref name) = filter.name {
            if &record.name != name {
                return false;
            }
        }
        if let Some(ref category) = filter.category {
            if &record.category != category {
                return false;
            }
        }
        if let Some(is_published) = filter.is_published {
            if record.is_published != is_published {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let record = ProductRecord::new(input);
        let product = Product::from(record.clone());

        self.store.write().await.insert(record.id, record);
        Ok(product)
    }

    async fn find_many(
        &self,
        filter: FindProduct,
        offset: u64,
        limit: i64,
    ) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;

        let mut records: Vec<&ProductRecord> = store
            .values()
            .filter(|r| Self::matches(r, &filter))
            .collect();
        records.sort_by_key(|r| (r.created_at, r.id));

        let take = if limit > 0 { limit as usize } else { usize::MAX };
        Ok(records
            .into_iter()
            .skip(offset as usize)
            .take(take)
            .cloned()
            .map(Product::from)
            .collect())
    }

    async fn exists(&self, filter: FindProduct) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.values().any(|r| Self::matches(r, &filter)))
    }

    async fn count(&self, filter: FindProduct) -> ProductResult<u64> {
        let store = self.store.read().await;
        Ok(store.values().filter(|r| Self::matches(r, &filter)).count() as u64)
    }

    async fn update_one(&self, id: Uuid, patch: UpdateProduct) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        match store.get_mut(&id) {
            Some(record) if !record.deleted => {
                record.apply_update(patch);
                Ok(Some(Product::from(record.clone())))
            }
            _ => Ok(None),
        }
    }

    async fn soft_delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;

        match store.get_mut(&id) {
            Some(record) if !record.deleted => {
                record.deleted = true;
                record.updated_at = chrono::Utc::now();
                Ok(Some(Product::from(record.clone())))
            }
            _ => Ok(None),
        }
    }

    async fn hard_delete(&self, id: Uuid) -> ProductResult<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id).map(Product::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str, category: &str) -> CreateProduct {
        CreateProduct {
            name: name.to_string(),
            description: format!("{} description", name),
            price: 10.0,
            stock: 5,
            category: category.to_string(),
            image_url: None,
            is_published: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create_input("Lamp", "home")).await.unwrap();

        let found = repo
            .find_many(FindProduct::default(), 0, 0)
            .await
            .unwrap();
        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_find_many_filters_by_category() {
        let repo = InMemoryProductRepository::new();
        repo.create(create_input("Lamp", "home")).await.unwrap();
        repo.create(create_input("Mouse", "electronics")).await.unwrap();

        let found = repo
            .find_many(
                FindProduct {
                    category: Some("electronics".to_string()),
                    ..Default::default()
                },
                0,
                0,
            )
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mouse");
    }

    #[tokio::test]
    async fn test_find_many_pagination() {
        let repo = InMemoryProductRepository::new();
        for i in 0..5 {
            repo.create(create_input(&format!("P{}", i), "misc"))
                .await
                .unwrap();
        }

        let page = repo
            .find_many(FindProduct::default(), 2, 2)
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "P2");
        assert_eq!(page[1].name, "P3");
    }

    #[tokio::test]
    async fn test_update_one() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create_input("Lamp", "home")).await.unwrap();

        let updated = repo
            .update_one(
                created.id,
                UpdateProduct {
                    price: Some(15.5),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.price, 15.5);
        assert_eq!(updated.name, "Lamp");
    }

    #[tokio::test]
    async fn test_update_one_missing_returns_none() {
        let repo = InMemoryProductRepository::new();
        let result = repo
            .update_one(Uuid::now_v7(), UpdateProduct::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_soft_delete_hides_record() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create_input("Lamp", "home")).await.unwrap();

        let deleted = repo.soft_delete(created.id).await.unwrap();
        assert!(deleted.is_some());

        // Invisible to reads and further soft deletes
        assert!(!repo.exists(FindProduct::default()).await.unwrap());
        assert_eq!(repo.count(FindProduct::default()).await.unwrap(), 0);
        assert!(repo.soft_delete(created.id).await.unwrap().is_none());
        assert!(repo
            .update_one(created.id, UpdateProduct::default())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_hard_delete_removes_soft_deleted_record() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(create_input("Lamp", "home")).await.unwrap();

        repo.soft_delete(created.id).await.unwrap();

        let removed = repo.hard_delete(created.id).await.unwrap();
        assert!(removed.is_some());

        // Gone entirely now
        assert!(repo.hard_delete(created.id).await.unwrap().is_none());
    }
}

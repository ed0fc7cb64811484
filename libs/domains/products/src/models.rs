use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

/// Image URL applied when a product is created without one
pub const DEFAULT_IMAGE_URL: &str = "https://image-link.com";

/// Number of products returned per page
pub const PAGE_SIZE: i64 = 10;

/// Product as exposed through the API.
///
/// The persisted shape is [`ProductRecord`]; the `deleted` flag never
/// leaves the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier
    pub id: Uuid,
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Unit price
    pub price: f64,
    /// Stock quantity
    pub stock: i64,
    /// Product category
    pub category: String,
    /// Product image URL
    pub image_url: String,
    /// Whether the product is visible in the public catalog
    pub is_published: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Product as stored in MongoDB.
///
/// Carries the soft-delete flag; every default repository query excludes
/// records where `deleted` is true.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub category: String,
    pub image_url: String,
    pub is_published: bool,
    /// Soft-delete marker, never serialized into API responses
    #[serde(default)]
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock: i64,
    #[validate(length(min = 1))]
    pub category: String,
    /// Defaults to [`DEFAULT_IMAGE_URL`] when absent
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    /// Defaults to true when absent
    pub is_published: Option<bool>,
}

/// DTO for partially updating a product; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(range(min = 0))]
    pub stock: Option<i64>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub image_url: Option<String>,
    pub is_published: Option<bool>,
}

/// Query filters for finding products
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct FindProduct {
    /// Filter by product ID
    pub id: Option<Uuid>,
    /// Filter by exact name
    pub name: Option<String>,
    /// Filter by category
    pub category: Option<String>,
    /// Filter by publication state
    pub is_published: Option<bool>,
}

impl ProductRecord {
    /// Create a new record from a CreateProduct DTO, applying defaults.
    pub fn new(input: CreateProduct) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            price: input.price,
            stock: input.stock,
            category: input.category,
            image_url: input.image_url.unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
            is_published: input.is_published.unwrap_or(true),
            deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, bumping the update timestamp.
    pub fn apply_update(&mut self, patch: UpdateProduct) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(is_published) = patch.is_published {
            self.is_published = is_published;
        }
        self.updated_at = Utc::now();
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            description: record.description,
            price: record.price,
            stock: record.stock,
            category: record.category,
            image_url: record.image_url,
            is_published: record.is_published,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Keyboard".to_string(),
            description: "Mechanical keyboard".to_string(),
            price: 79.9,
            stock: 25,
            category: "electronics".to_string(),
            image_url: None,
            is_published: None,
        }
    }

    #[test]
    fn test_new_record_applies_defaults() {
        let record = ProductRecord::new(create_input());

        assert_eq!(record.image_url, DEFAULT_IMAGE_URL);
        assert!(record.is_published);
        assert!(!record.deleted);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn test_new_record_keeps_explicit_values() {
        let record = ProductRecord::new(CreateProduct {
            image_url: Some("https://cdn.example.com/kb.png".to_string()),
            is_published: Some(false),
            ..create_input()
        });

        assert_eq!(record.image_url, "https://cdn.example.com/kb.png");
        assert!(!record.is_published);
    }

    #[test]
    fn test_apply_update_is_partial() {
        let mut record = ProductRecord::new(create_input());
        let created_at = record.created_at;

        record.apply_update(UpdateProduct {
            price: Some(59.9),
            ..Default::default()
        });

        assert_eq!(record.price, 59.9);
        assert_eq!(record.name, "Keyboard");
        assert_eq!(record.created_at, created_at);
        assert!(record.updated_at >= created_at);
    }

    #[test]
    fn test_record_to_product_drops_deleted_flag() {
        let mut record = ProductRecord::new(create_input());
        record.deleted = true;

        let product = Product::from(record.clone());
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(product.id, record.id);
        assert!(json.get("deleted").is_none());
    }

    #[test]
    fn test_create_validation() {
        use validator::Validate;

        let valid = create_input();
        assert!(valid.validate().is_ok());

        let invalid = CreateProduct {
            name: String::new(),
            price: -1.0,
            stock: -3,
            ..create_input()
        };
        let errors = invalid.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("price"));
        assert!(errors.field_errors().contains_key("stock"));
    }
}

//! Products Domain
//!
//! A complete domain implementation for a product catalog backed by MongoDB,
//! with soft deletes and a public/guarded split at the HTTP layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints (public reads, JWT-guarded writes)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, pagination
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory impls)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, soft-delete record shape
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use axum_helpers::auth::{JwtAuth, JwtConfig};
//! use domain_products::{
//!     handlers,
//!     mongodb::MongoProductRepository,
//!     service::ProductService,
//! };
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = Arc::new(MongoProductRepository::new(&db));
//! let service = ProductService::new(repository);
//!
//! let auth = JwtAuth::new(&JwtConfig::new("a-secret-at-least-32-characters-long"));
//! let router = handlers::router(service, auth);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, FindProduct, Product, ProductRecord, UpdateProduct, PAGE_SIZE};
pub use memory::InMemoryProductRepository;
pub use mongodb::MongoProductRepository;
pub use repository::ProductRepository;
pub use service::ProductService;

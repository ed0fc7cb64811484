//! Database library providing the MongoDB connector and utilities used by
//! the catalog services.
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connection management, retry and health checks
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - Everything
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//! let collection = db.collection::<Document>("products");
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};

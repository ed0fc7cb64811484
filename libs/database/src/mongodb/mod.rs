//! MongoDB connection management
//!
//! Provides configuration, connection helpers with retry support and
//! health checks on top of the official `mongodb` driver.

pub mod config;
pub mod connector;
pub mod health;

pub use config::MongoConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_retry,
};
pub use health::{HealthStatus, check_health, check_health_detailed};

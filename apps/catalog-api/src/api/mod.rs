//! API routes module

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use axum_helpers::{
    auth::JwtAuth,
    server::{run_health_checks, HealthCheckFuture},
};
use domain_products::{handlers, MongoProductRepository, ProductService};
use serde_json::Value;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let repository = Arc::new(MongoProductRepository::new(&state.db));
    let service = ProductService::new(repository);
    let auth = JwtAuth::new(&state.config.jwt);

    Router::new()
        .nest("/products", handlers::router(service, auth))
        .nest("/activity", domain_activity::handlers::router())
}

/// Readiness probe router, checked against a live MongoDB ping
pub fn ready_router(state: AppState) -> Router {
    Router::new().route("/ready", get(move || ready(state)))
}

async fn ready(
    state: AppState,
) -> Result<(axum::http::StatusCode, Json<Value>), (axum::http::StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async move {
            if database::mongodb::check_health(&state.mongo_client).await {
                Ok(())
            } else {
                Err("MongoDB ping failed".to_string())
            }
        }),
    )];

    run_health_checks(checks).await
}

/// Initialize database indexes
pub async fn init_indexes(state: &AppState) -> eyre::Result<()> {
    let repository = MongoProductRepository::new(&state.db);
    repository.init_indexes().await?;
    Ok(())
}

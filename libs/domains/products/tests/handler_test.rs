//! Handler tests for the Products domain
//!
//! These tests exercise the HTTP layer over the in-memory repository:
//! request deserialization, validation, the response envelope, status
//! codes and the JWT guard on write routes.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use axum_helpers::auth::{JwtAuth, JwtConfig};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // For oneshot()

const TEST_SECRET: &str = "handler-test-secret-that-is-long-enough!";

fn setup() -> (Router, ProductService<InMemoryProductRepository>, JwtAuth) {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = ProductService::new(repository);
    let auth = JwtAuth::new(&JwtConfig::new(TEST_SECRET));
    let app = handlers::router(service.clone(), auth.clone());
    (app, service, auth)
}

fn bearer(auth: &JwtAuth) -> String {
    let token = auth
        .create_access_token("user-1", "admin@example.com", "Admin", &["admin".to_string()])
        .unwrap();
    format!("Bearer {}", token)
}

fn create_input(name: &str, category: &str) -> CreateProduct {
    CreateProduct {
        name: name.to_string(),
        description: format!("{} description", name),
        price: 19.9,
        stock: 7,
        category: category.to_string(),
        image_url: None,
        is_published: None,
    }
}

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_product_returns_201_with_defaults() {
    let (app, _service, auth) = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "Keyboard",
                "description": "Mechanical keyboard",
                "price": 79.9,
                "stock": 25,
                "category": "electronics"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Keyboard");
    assert_eq!(body["data"]["image_url"], "https://image-link.com");
    assert_eq!(body["data"]["is_published"], true);
    assert!(body["data"].get("deleted").is_none());
}

#[tokio::test]
async fn test_create_product_requires_token() {
    let (app, _service, _auth) = setup();

    let payload = serde_json::to_string(&json!({
        "name": "Keyboard",
        "description": "Mechanical keyboard",
        "price": 79.9,
        "stock": 25,
        "category": "electronics"
    }))
    .unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.clone()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A token signed with a different secret is rejected too
    let other = JwtAuth::new(&JwtConfig::new("another-secret-that-is-long-enough!!!!!"));
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&other))
        .body(Body::from(payload))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_product_validates_input() {
    let (app, _service, auth) = setup();

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::from(
            serde_json::to_string(&json!({
                "name": "",
                "description": "Mechanical keyboard",
                "price": -1.0,
                "stock": 25,
                "category": "electronics"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_returns_404_when_empty() {
    let (app, _service, _auth) = setup();

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_search_products_filters_by_category() {
    let (app, service, _auth) = setup();

    service.create(create_input("Lamp", "home")).await.unwrap();
    service
        .create(create_input("Mouse", "electronics"))
        .await
        .unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/search?category=electronics")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"][0]["name"], "Mouse");
}

#[tokio::test]
async fn test_search_products_returns_404_on_no_matches() {
    let (app, service, _auth) = setup();

    service.create(create_input("Lamp", "home")).await.unwrap();

    let request = Request::builder()
        .method("GET")
        .uri("/search?category=garden")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_exists_and_count_answer_even_when_empty() {
    let (app, _service, _auth) = setup();

    let request = Request::builder()
        .method("GET")
        .uri("/exists?category=garden")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"], false);

    let request = Request::builder()
        .method("GET")
        .uri("/count?category=garden")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"], 0);
}

#[tokio::test]
async fn test_pagination_slices_ten_per_page() {
    let (app, service, _auth) = setup();

    for i in 0..12 {
        service
            .create(create_input(&format!("P{:02}", i), "misc"))
            .await
            .unwrap();
    }

    let request = Request::builder()
        .method("GET")
        .uri("/2")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][0]["name"], "P10");

    // Past the last page there is nothing to return
    let request = Request::builder()
        .method("GET")
        .uri("/3")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_page_is_rejected() {
    let (app, _service, _auth) = setup();

    let request = Request::builder()
        .method("GET")
        .uri("/not-a-page")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_product_applies_partial_patch() {
    let (app, service, auth) = setup();

    let created = service.create(create_input("Lamp", "home")).await.unwrap();

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}", created.id))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::from(
            serde_json::to_string(&json!({ "price": 24.5 })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product updated successfully");
    assert_eq!(body["data"]["price"], 24.5);
    assert_eq!(body["data"]["name"], "Lamp");
}

#[tokio::test]
async fn test_update_product_rejects_invalid_uuid() {
    let (app, _service, auth) = setup();

    let request = Request::builder()
        .method("PATCH")
        .uri("/not-a-uuid")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_missing_product_returns_404() {
    let (app, _service, auth) = setup();

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/{}", uuid::Uuid::now_v7()))
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::from("{}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_soft_delete_hides_product_from_reads() {
    let (app, service, auth) = setup();

    let created = service.create(create_input("Lamp", "home")).await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Product deleted successfully");

    // The catalog no longer sees the product
    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Nor does a second soft delete
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", created.id))
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_hard_delete_removes_soft_deleted_product() {
    let (app, service, auth) = setup();

    let created = service.create(create_input("Lamp", "home")).await.unwrap();
    service.soft_delete(created.id).await.unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}/hard", created.id))
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Gone for good: a second hard delete finds nothing
    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/{}/hard", created.id))
        .header(header::AUTHORIZATION, bearer(&auth))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_read_router_exposes_no_write_routes() {
    let repository = Arc::new(InMemoryProductRepository::new());
    let service = ProductService::new(repository);
    service.create(create_input("Lamp", "home")).await.unwrap();

    let app = handlers::read_router(service);

    let request = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

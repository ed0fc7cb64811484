//! HTTP handlers for the Products API
//!
//! Two route tables share one service: [`read_router`] exposes the public
//! catalog reads, [`router`] adds the JWT-guarded write operations on top.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use axum_helpers::{
    auth::{jwt_auth_middleware, JwtAuth},
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    ApiResponse, UuidPath, ValidatedJson,
};
use utoipa::OpenApi;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, FindProduct, Product, UpdateProduct};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        search_products,
        product_exists,
        count_products,
        get_page,
        update_product,
        soft_delete_product,
        hard_delete_product,
    ),
    components(
        schemas(Product, CreateProduct, UpdateProduct, FindProduct),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            UnauthorizedResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Public read-only router: listing, search, exists, count and pagination
pub fn read_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/search", get(search_products))
        .route("/exists", get(product_exists))
        .route("/count", get(count_products))
        .route("/{id}", get(get_page))
        .with_state(service)
}

/// Full router: public reads plus JWT-guarded writes.
///
/// Reads and writes share path segments, so the guard is applied per
/// method rather than per route.
pub fn router<R: ProductRepository + 'static>(
    service: ProductService<R>,
    auth: JwtAuth,
) -> Router {
    let guard = || middleware::from_fn_with_state(auth.clone(), jwt_auth_middleware);

    Router::new()
        .route(
            "/",
            get(list_products).merge(post(create_product).layer(guard())),
        )
        .route("/search", get(search_products))
        .route("/exists", get(product_exists))
        .route("/count", get(count_products))
        .route(
            "/{id}",
            get(get_page).merge(
                patch(update_product)
                    .delete(soft_delete_product)
                    .layer(guard()),
            ),
        )
        .route("/{id}/hard", delete(hard_delete_product).layer(guard()))
        .with_state(service)
}

/// List the first page of products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "First page of products", body = ApiResponse<Vec<Product>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<ProductService<R>>,
) -> ProductResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.get_all(1).await?;
    if products.is_empty() {
        return Err(ProductError::NoMatches);
    }
    Ok(Json(ApiResponse::new(products)))
}

/// List one page of products, 10 per page
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = u64, Path, description = "1-based page number")
    ),
    responses(
        (status = 200, description = "Requested page of products", body = ApiResponse<Vec<Product>>),
        (status = 400, description = "Non-numeric page number"),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_page<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Path(page): Path<u64>,
) -> ProductResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.get_all(page).await?;
    if products.is_empty() {
        return Err(ProductError::NoMatches);
    }
    Ok(Json(ApiResponse::new(products)))
}

/// Find products matching search criteria
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(FindProduct),
    responses(
        (status = 200, description = "Matching products", body = ApiResponse<Vec<Product>>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Query(filter): Query<FindProduct>,
) -> ProductResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.find(filter).await?;
    if products.is_empty() {
        return Err(ProductError::NoMatches);
    }
    Ok(Json(ApiResponse::new(products)))
}

/// Check whether any product matches search criteria
#[utoipa::path(
    get,
    path = "/exists",
    tag = "Products",
    params(FindProduct),
    responses(
        (status = 200, description = "Existence flag", body = ApiResponse<bool>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn product_exists<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Query(filter): Query<FindProduct>,
) -> ProductResult<Json<ApiResponse<bool>>> {
    // Zero matches is a valid answer here, never a 404
    let exists = service.exists(filter).await?;
    Ok(Json(ApiResponse::new(exists)))
}

/// Count products matching search criteria
#[utoipa::path(
    get,
    path = "/count",
    tag = "Products",
    params(FindProduct),
    responses(
        (status = 200, description = "Product count", body = ApiResponse<u64>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_products<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    Query(filter): Query<FindProduct>,
) -> ProductResult<Json<ApiResponse<u64>>> {
    let count = service.get_count(filter).await?;
    Ok(Json(ApiResponse::new(count)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    security(("jwt" = [])),
    responses(
        (status = 201, description = "Product created successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(product))))
}

/// Partially update an existing product
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    security(("jwt" = [])),
    responses(
        (status = 200, description = "Product updated successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(patch): ValidatedJson<UpdateProduct>,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.update(id, patch).await?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// Soft delete a product, hiding it from all reads
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    security(("jwt" = [])),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn soft_delete_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.soft_delete(id).await?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

/// Permanently delete a product, soft-deleted or not
#[utoipa::path(
    delete,
    path = "/{id}/hard",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    security(("jwt" = [])),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn hard_delete_product<R: ProductRepository>(
    State(service): State<ProductService<R>>,
    UuidPath(id): UuidPath,
) -> ProductResult<Json<ApiResponse<Product>>> {
    let product = service.hard_delete(id).await?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

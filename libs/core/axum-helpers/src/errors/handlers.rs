use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorCode, error_response};

/// Handler for 404 Not Found errors.
///
/// Use as a fallback handler in your router.
pub async fn not_found() -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "The requested resource was not found".to_string(),
        ErrorCode::NotFound,
    )
}

/// Handler for 405 Method Not Allowed errors.
pub async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        axum::Json(serde_json::json!({
            "code": ErrorCode::UnprocessableEntity.code(),
            "error": "METHOD_NOT_ALLOWED",
            "message": "The HTTP method is not allowed for this resource",
        })),
    )
        .into_response()
}

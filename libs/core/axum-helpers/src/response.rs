//! Success response envelope shared by all API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard success envelope wrapping response payloads.
///
/// All 2xx responses use this shape:
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Product created"
/// }
/// ```
///
/// `message` is omitted from the JSON when not set.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always true for success responses
    pub success: bool,
    /// The response payload
    pub data: T,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload with no message.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    /// Wrap a payload with a message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_without_message() {
        let response = ApiResponse::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_envelope_with_message() {
        let response = ApiResponse::with_message("payload", "Created");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "payload");
        assert_eq!(json["message"], "Created");
    }
}
